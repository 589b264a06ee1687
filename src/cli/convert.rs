//! # 转换参数 CLI 定义
//!
//! 批量转换目录下的音频文件 (例如 .webm -> .mp3)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

/// 转换参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Extension of the files to convert (letters, digits, hyphens; leading dot optional)
    #[arg(default_value = "webm")]
    pub input: String,

    /// Target extension
    #[arg(default_value = "mp3")]
    pub output: String,

    /// Keep the original files after a successful conversion
    #[arg(short, long, default_value_t = false)]
    pub keep: bool,

    /// Only list the files that would be converted
    #[arg(short, long, default_value_t = false)]
    pub list: bool,

    /// Directory containing the files to convert
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// FFmpeg executable
    #[arg(long, env = "FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg: String,

    /// Diagnostic log file (default: <DIR>/audioconv.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
