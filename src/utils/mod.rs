//! # 工具函数模块
//!
//! 提供美化输出、进度指示、交互提示、诊断日志与 Ctrl-C 处理。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/` 模块使用
//! - 子模块: interrupt, logging, output, progress, prompt

pub mod interrupt;
pub mod logging;
pub mod output;
pub mod progress;
pub mod prompt;
