//! # 交互提示
//!
//! 中断时询问用户是否保留未完成的输出文件。
//!
//! ## 依赖关系
//! - 实现 `batch::runner::Confirm`
//! - 使用 `dialoguer` crate

use crate::batch::Confirm;
use crate::error::Result;

use dialoguer::Confirm as ConfirmPrompt;
use std::path::Path;

/// 终端确认提示，默认回答为"否"（删除未完成文件）
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn keep_unfinished(&self, path: &Path) -> Result<bool> {
        let keep = ConfirmPrompt::new()
            .with_prompt(format!(
                "Do you want to keep the unfinished file \"{}\"?",
                path.display()
            ))
            .default(false)
            .interact()?;
        Ok(keep)
    }
}
