//! # Ctrl-C 处理
//!
//! 把 SIGINT 转换为共享的取消标志，由批量执行器在循环边界检查。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `ctrlc` crate

use crate::error::Result;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 中断后的进程退出码 (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;

/// 安装处理器，返回取消标志
pub fn install_handler() -> Result<Arc<AtomicBool>> {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
    Ok(cancelled)
}
