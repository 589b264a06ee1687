//! # 批量转换命令实现
//!
//! ## 功能
//! - 校验扩展名并构建 `RunConfig`
//! - 收集工作目录中的候选文件
//! - 检查 FFmpeg 是否可用
//! - 安装 Ctrl-C 处理器与诊断日志
//! - 顺序执行批量转换并汇总结果
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `models/`, `transcoder/`
//! - 使用 `utils/output.rs`, `utils/logging.rs`, `utils/interrupt.rs`, `utils/prompt.rs`

use crate::batch::{BatchResult, BatchRunner, FileCollector};
use crate::cli::convert::ConvertArgs;
use crate::commands::list;
use crate::error::Result;
use crate::models::RunConfig;
use crate::transcoder::{Ffmpeg, Transcoder};
use crate::utils::prompt::TerminalConfirm;
use crate::utils::{interrupt, logging, output};

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 失败汇总行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行转换
pub fn execute(args: ConvertArgs) -> Result<()> {
    let config = RunConfig::from_args(&args)?;

    output::print_header(&format!(
        "{} -> {}{}",
        config.input,
        config.output,
        if config.keep_originals {
            " (keeping the original files)"
        } else {
            ""
        }
    ));
    output::print_info(&format!("Directory: {}", config.directory.display()));

    let log_path = logging::log_file_path(args.log_file.as_deref(), &config.directory);
    let files = FileCollector::new(&config.directory)
        .with_extension(&config.input)
        .collect()?;
    let files = without_log_file(files, &log_path);

    if config.list_only {
        list::print_candidates(&config, &files);
        return Ok(());
    }

    if files.is_empty() {
        output::print_warning(&format!(
            "No '{}' files in {}",
            config.input,
            config.directory.display()
        ));
        return Ok(());
    }

    let ffmpeg = Ffmpeg::locate(&args.ffmpeg)?;
    logging::init_logging(&log_path)?;
    log::info!(
        "Converting {} file(s) {} -> {} in {} (keep originals: {}) with {}",
        files.len(),
        config.input,
        config.output,
        config.directory.display(),
        config.keep_originals,
        ffmpeg.name()
    );

    let cancelled = interrupt::install_handler()?;
    output::print_info(&format!("Found {} file(s) to convert\n", files.len()));

    let runner = BatchRunner::new(&config, &ffmpeg, &TerminalConfirm, cancelled);
    let report = runner.run(&files);

    if let Some(interruption) = &report.interrupted {
        print_summary(&report.result, &log_path);
        output::print_info("Exiting.");
        match &interruption.unfinished {
            Some(path) if interruption.removed => {
                log::info!("Interrupted by user, removed unfinished {}", path.display())
            }
            Some(path) => log::info!("Interrupted by user, kept unfinished {}", path.display()),
            None => log::info!("Interrupted by user between files"),
        }
        log::logger().flush();
        std::process::exit(interrupt::EXIT_INTERRUPTED);
    }

    print_summary(&report.result, &log_path);
    log::info!(
        "Finished: {} converted, {} skipped, {} failed, {} missing",
        report.result.converted,
        report.result.skipped,
        report.result.failed,
        report.result.missing
    );
    Ok(())
}

/// 诊断日志本身不作为候选文件
fn without_log_file(mut files: Vec<PathBuf>, log_path: &Path) -> Vec<PathBuf> {
    files.retain(|f| f != log_path);
    files
}

fn print_summary(result: &BatchResult, log_path: &Path) {
    output::print_done(&format!(
        "Converted {} of {} file(s) ({} original(s) deleted, {} skipped, {} failed, {} missing)",
        result.converted,
        result.total(),
        result.removed,
        result.skipped,
        result.failed,
        result.missing
    ));

    if result.failures.is_empty() {
        return;
    }

    let rows: Vec<FailureRow> = result
        .failures
        .iter()
        .map(|(path, reason)| FailureRow {
            file: path.display().to_string(),
            reason: reason.clone(),
        })
        .collect();
    println!("{}", Table::new(&rows));
    output::print_warning(&format!("Details were written to {}", log_path.display()));
}
