//! # 运行配置模型
//!
//! 定义扩展名 `Extension` 与一次运行的不可变配置 `RunConfig`。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 使用
//! - 使用 `regex` 校验扩展名

use crate::cli::convert::ConvertArgs;
use crate::error::{AudioconvError, Result};

use regex::Regex;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// 扩展名合法字符：字母数字开头，其后允许连字符
fn extension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").unwrap())
}

/// 规范化后的文件扩展名（小写，带一个前导点）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// 解析用户输入，允许一个可选的前导点
    pub fn parse(raw: &str) -> Option<Self> {
        let bare = raw.strip_prefix('.').unwrap_or(raw).to_ascii_lowercase();
        if extension_regex().is_match(&bare) {
            Some(Extension(format!(".{}", bare)))
        } else {
            None
        }
    }

    /// 带点形式，例如 `.mp3`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一次批量转换的完整配置，构建后不再修改
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 待转换文件的扩展名
    pub input: Extension,
    /// 目标扩展名
    pub output: Extension,
    /// 工作目录
    pub directory: PathBuf,
    /// 转换成功后是否保留原文件
    pub keep_originals: bool,
    /// 仅列出候选文件
    pub list_only: bool,
}

impl RunConfig {
    /// 校验扩展名并构建配置
    pub fn new(
        input: &str,
        output: &str,
        directory: impl Into<PathBuf>,
        keep_originals: bool,
        list_only: bool,
    ) -> Result<Self> {
        let input = Extension::parse(input).ok_or_else(|| AudioconvError::InvalidExtension {
            role: "input".to_string(),
            value: input.to_string(),
        })?;
        let output = Extension::parse(output).ok_or_else(|| AudioconvError::InvalidExtension {
            role: "output".to_string(),
            value: output.to_string(),
        })?;

        if input == output {
            return Err(AudioconvError::InvalidArgument(format!(
                "input and output extensions are both '{}'",
                input
            )));
        }

        Ok(RunConfig {
            input,
            output,
            directory: directory.into(),
            keep_originals,
            list_only,
        })
    }

    /// 从命令行参数构建
    pub fn from_args(args: &ConvertArgs) -> Result<Self> {
        Self::new(&args.input, &args.output, args.dir.clone(), args.keep, args.list)
    }

    /// 计算候选文件对应的输出路径（去除主文件名首尾空白）
    ///
    /// 主文件名不是合法 UTF-8 时保留原始字节，不做修剪。
    pub fn output_path(&self, candidate: &Path) -> PathBuf {
        let stem = candidate.file_stem().unwrap_or_default();
        let mut name = match stem.to_str() {
            Some(s) => OsString::from(s.trim()),
            None => stem.to_os_string(),
        };
        name.push(self.output.as_str());

        let parent = candidate.parent().unwrap_or(&self.directory);
        parent.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_normalization() {
        for raw in ["mp3", ".mp3", "MP3", ".Mp3", "x-wav", "M4A", "3gp"] {
            let ext = Extension::parse(raw).unwrap();
            let s = ext.as_str();
            assert!(s.starts_with('.'), "{}", s);
            assert!(!s[1..].starts_with('.'), "{}", s);
            assert_eq!(s, s.to_lowercase());
        }
        assert_eq!(Extension::parse(".WEBM").unwrap().as_str(), ".webm");
        assert_eq!(Extension::parse("x-wav").unwrap().as_str(), ".x-wav");
    }

    #[test]
    fn test_extension_rejects_invalid() {
        for raw in ["", ".", "..mp3", "mp 3", "mp3!", "*.mp3", "a/b", "-mp3", "ogg.", "é"] {
            assert!(Extension::parse(raw).is_none(), "accepted '{}'", raw);
        }
    }

    #[test]
    fn test_run_config_rejects_before_filesystem_access() {
        // 目录不存在也应先因扩展名失败
        let err = RunConfig::new("we bm", "mp3", "/definitely/not/here", false, false).unwrap_err();
        assert!(matches!(err, AudioconvError::InvalidExtension { ref role, .. } if role == "input"));

        let err = RunConfig::new("webm", "mp$", "/definitely/not/here", false, false).unwrap_err();
        assert!(matches!(err, AudioconvError::InvalidExtension { ref role, .. } if role == "output"));
    }

    #[test]
    fn test_run_config_rejects_same_extension() {
        let err = RunConfig::new("MP3", ".mp3", ".", false, false).unwrap_err();
        assert!(matches!(err, AudioconvError::InvalidArgument(_)));
    }

    #[test]
    fn test_output_path() {
        let config = RunConfig::new("webm", "mp3", "/music", false, false).unwrap();
        assert_eq!(
            config.output_path(Path::new("/music/song.webm")),
            PathBuf::from("/music/song.mp3")
        );
        assert_eq!(
            config.output_path(Path::new("/music/ padded name .webm")),
            PathBuf::from("/music/padded name.mp3")
        );
        assert_eq!(
            config.output_path(Path::new("/music/a.b.WEBM")),
            PathBuf::from("/music/a.b.mp3")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_output_path_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let config = RunConfig::new("webm", "mp3", "/music", false, false).unwrap();
        let candidate = Path::new("/music").join(OsStr::from_bytes(b"caf\xe9.webm"));
        let output = config.output_path(&candidate);

        assert_eq!(output.file_name().unwrap().as_bytes(), b"caf\xe9.mp3");
        assert_eq!(output.parent(), Some(Path::new("/music")));
    }
}
