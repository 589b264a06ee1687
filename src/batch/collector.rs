//! # 文件收集器
//!
//! 在工作目录中收集候选文件列表。
//!
//! ## 功能
//! - 仅扫描单层目录，不递归
//! - 按扩展名做大小写不敏感的 glob 匹配
//! - 只收集普通文件（跟随符号链接）
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/list.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 做匹配

use crate::error::{AudioconvError, Result};
use crate::models::Extension;

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 文件收集器
pub struct FileCollector {
    /// 工作目录
    directory: PathBuf,
    /// 文件名匹配模式
    pattern: String,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配所有文件）
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            pattern: "*".to_string(),
        }
    }

    /// 只匹配给定扩展名
    pub fn with_extension(mut self, extension: &Extension) -> Self {
        self.pattern = format!("*{}", extension.as_str());
        self
    }

    /// 收集所有匹配的文件，按路径排序
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.is_dir() {
            return Err(AudioconvError::DirectoryNotFound {
                path: self.directory.display().to_string(),
            });
        }

        let pattern = Pattern::new(&self.pattern).map_err(|e| {
            AudioconvError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.directory).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(AudioconvError::DirectoryReadError {
                        path: self.directory.display().to_string(),
                        source: e.into(),
                    });
                }
                Err(_) => continue,
            };

            if Self::is_candidate(entry.path(), &pattern) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// 文件名匹配且为普通文件
    ///
    /// 非 UTF-8 文件名按有损转换匹配，扩展名本身只含 ASCII，不受影响。
    fn is_candidate(path: &Path, pattern: &Pattern) -> bool {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };
        pattern.matches_with(&name, MATCH_OPTIONS) && path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ext(s: &str) -> Extension {
        Extension::parse(s).unwrap()
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_collects_matching_files_only() {
        let dir = TempDir::new().unwrap();
        for name in ["b.webm", "a.webm", "c.mp3", "notes.txt", "webm"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let files = FileCollector::new(dir.path())
            .with_extension(&ext("webm"))
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.webm", "b.webm"]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LOUD.WEBM"), b"x").unwrap();
        fs::write(dir.path().join("quiet.webm"), b"x").unwrap();

        let files = FileCollector::new(dir.path())
            .with_extension(&ext("WebM"))
            .collect()
            .unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_skips_directories_and_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("album.webm")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.webm"), b"x").unwrap();
        fs::write(dir.path().join("top.webm"), b"x").unwrap();

        let files = FileCollector::new(dir.path())
            .with_extension(&ext("webm"))
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["top.webm"]);
    }

    #[test]
    fn test_hyphenated_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("take.x-wav"), b"x").unwrap();
        fs::write(dir.path().join("take.wav"), b"x").unwrap();

        let files = FileCollector::new(dir.path())
            .with_extension(&ext(".x-wav"))
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["take.x-wav"]);
    }

    // macOS 文件系统拒绝非 UTF-8 文件名
    #[cfg(target_os = "linux")]
    #[test]
    fn test_collects_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let raw = OsStr::from_bytes(b"caf\xe9.webm");
        fs::write(dir.path().join(raw), b"x").unwrap();
        fs::write(dir.path().join("ok.webm"), b"x").unwrap();

        let files = FileCollector::new(dir.path())
            .with_extension(&ext("webm"))
            .collect()
            .unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.contains(&dir.path().join(raw)));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let err = FileCollector::new(&missing)
            .with_extension(&ext("webm"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, AudioconvError::DirectoryNotFound { .. }));
    }
}
