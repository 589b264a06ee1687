//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `audioconv [OPTIONS] [INPUT] [OUTPUT]`
//! - 默认批量转换
//! - `--list` 仅列出候选文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// audioconv - 目录级批量音频转换
#[derive(Parser)]
#[command(name = "audioconv")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Convert every audio file of one type in a directory via FFmpeg", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: convert::ConvertArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["audioconv"]).unwrap();
        assert_eq!(cli.args.input, "webm");
        assert_eq!(cli.args.output, "mp3");
        assert!(!cli.args.keep);
        assert!(!cli.args.list);
        assert_eq!(cli.args.dir, PathBuf::from("."));
        assert!(cli.args.log_file.is_none());
    }

    #[test]
    fn test_positional_and_flags() {
        let cli =
            Cli::try_parse_from(["audioconv", ".flac", "ogg", "-k", "--list", "-d", "/music"])
                .unwrap();
        assert_eq!(cli.args.input, ".flac");
        assert_eq!(cli.args.output, "ogg");
        assert!(cli.args.keep);
        assert!(cli.args.list);
        assert_eq!(cli.args.dir, PathBuf::from("/music"));
    }
}
