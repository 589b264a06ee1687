//! # 数据模型模块
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/` 使用
//! - 子模块: config

pub mod config;

pub use config::{Extension, RunConfig};
