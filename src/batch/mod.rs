//! # 批量处理模块
//!
//! 提供目录级的批量转换能力。
//!
//! ## 功能
//! - 收集候选文件列表
//! - 顺序调用外部转码器
//! - 中断处理与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `walkdir`, `glob` 收集文件

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, Confirm};
