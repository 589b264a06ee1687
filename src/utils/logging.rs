//! # 诊断日志
//!
//! 以追加方式把失败诊断写入日志文件，终端输出仍走 `utils/output.rs`。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 初始化
//! - 使用 `log`, `simplelog` crate

use crate::error::{AudioconvError, Result};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// 默认日志文件名
pub const LOG_FILE_NAME: &str = "audioconv.log";

/// 日志文件路径：显式指定优先，否则放在工作目录下
pub fn log_file_path(explicit: Option<&Path>, directory: &Path) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => directory.join(LOG_FILE_NAME),
    }
}

/// 初始化追加写入的文件日志
pub fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AudioconvError::LogFileError {
            path: path.display().to_string(),
            source: e,
        })?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    // 重复初始化（例如测试中）忽略即可
    let _ = WriteLogger::init(LevelFilter::Info, config, file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_defaults_to_directory() {
        let path = log_file_path(None, Path::new("/music"));
        assert_eq!(path, PathBuf::from("/music/audioconv.log"));
    }

    #[test]
    fn test_log_file_path_explicit() {
        let path = log_file_path(Some(Path::new("/tmp/x.log")), Path::new("/music"));
        assert_eq!(path, PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn test_init_logging_unwritable_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = init_logging(&dir.path().join("missing").join("a.log")).unwrap_err();
        assert!(matches!(err, AudioconvError::LogFileError { .. }));
    }
}
