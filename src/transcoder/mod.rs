//! # 外部转码器模块
//!
//! 定义批量执行器与外部转码程序之间的接口。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/convert.rs` 使用
//! - 子模块: ffmpeg

pub mod ffmpeg;

pub use ffmpeg::Ffmpeg;

use crate::error::Result;
use std::path::Path;

/// 单次转码的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscodeStatus {
    /// 外部程序正常退出
    Success,
    /// 外部程序以非零状态退出（或被信号终止，此时 `code` 为 `None`）
    Failed { code: Option<i32>, stderr: String },
}

/// 外部转码器
pub trait Transcoder {
    /// 用于提示信息的程序名
    fn name(&self) -> &str;

    /// 将 `input` 转换到 `output`，阻塞直到外部程序结束。
    ///
    /// 仅当程序无法启动时返回 `Err`。
    fn transcode(&self, input: &Path, output: &Path) -> Result<TranscodeStatus>;
}
