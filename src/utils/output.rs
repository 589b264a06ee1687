//! # 终端状态行
//!
//! 每条消息以彩色标签开头，例如 `[OK]`、`[SKIP]`、`[FAIL]`。
//! 错误写到 stderr，其余写到 stdout。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 与 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

/// 致命错误
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 单个文件转换失败（批量任务继续）
pub fn print_fail(msg: &str) {
    tagged("[FAIL]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    tagged("[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    tagged("[*]".blue().bold(), msg);
}

/// 输出已存在，未转换
pub fn print_skip(msg: &str) {
    tagged("[SKIP]".dimmed(), msg);
}

/// 批量任务汇总
pub fn print_done(msg: &str) {
    tagged("[DONE]".green().bold(), msg);
}

/// `[OK] 源文件 -> 输出文件`
pub fn print_conversion(from: &str, to: &str) {
    tagged(
        "[OK]".green().bold(),
        &format!("{} {} {}", from.dimmed(), "->".cyan(), to),
    );
}

/// 运行开始时的标题，上下各一条横线
pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH);
    println!("\n{}\n  {}\n{}\n", rule.dimmed(), title.bold(), rule.dimmed());
}

/// 文件之间的分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
