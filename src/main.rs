//! # audioconv - 目录级批量音频转换
//!
//! 对工作目录中所有指定扩展名的文件逐个调用 FFmpeg 转换，
//! 按参数保留或删除原文件，Ctrl-C 时只清理正在生成的输出。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/         (命令行参数定义)
//!   ├── commands/    (命令执行逻辑)
//!   │     ├── batch/       (文件收集与批量执行)
//!   │     ├── transcoder/  (外部转码器)
//!   │     └── models/      (运行配置)
//!   ├── utils/       (输出、日志、提示、中断)
//!   └── error.rs     (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod transcoder;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        log::error!("{}", e);
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
