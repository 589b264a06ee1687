//! # 批量执行器
//!
//! 逐个文件顺序调用外部转码器。
//!
//! ## 功能
//! - 已存在的输出文件跳过，不覆盖
//! - 单个文件失败不会中断整批任务，原文件始终保留
//! - 仅在确认输出存在后才按配置删除原文件
//! - Ctrl-C 后停止循环，只清理正在生成的那一个输出文件
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `transcoder::Transcoder` 执行转换
//! - 使用 `utils/output.rs`, `utils/progress.rs` 反馈进度

use crate::error::Result;
use crate::models::RunConfig;
use crate::transcoder::{TranscodeStatus, Transcoder};
use crate::utils::{output, progress};

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 转换成功
    Converted {
        output: PathBuf,
        /// 原文件是否已删除
        source_removed: bool,
    },
    /// 跳过（输出文件已存在）
    Skipped { output: PathBuf },
    /// 转换失败，原文件保留
    Failed { reason: String },
    /// 原文件在枚举后消失
    Missing,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub converted: usize,
    /// 已删除的原文件数量
    pub removed: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 消失的原文件数量
    pub missing: usize,
    /// 失败详情
    pub failures: Vec<(PathBuf, String)>, // (文件路径, 错误信息)
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, input: &Path, result: ProcessResult) {
        match result {
            ProcessResult::Converted { source_removed, .. } => {
                self.converted += 1;
                if source_removed {
                    self.removed += 1;
                }
            }
            ProcessResult::Skipped { .. } => self.skipped += 1,
            ProcessResult::Failed { reason } => {
                self.failed += 1;
                self.failures.push((input.to_path_buf(), reason));
            }
            ProcessResult::Missing => self.missing += 1,
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed + self.missing
    }
}

/// 中断时的清理情况
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interruption {
    /// 中断时正在生成的输出文件（若磁盘上存在）
    pub unfinished: Option<PathBuf>,
    /// 该文件是否已被删除
    pub removed: bool,
}

/// 一次运行的报告
#[derive(Debug)]
pub struct RunReport {
    pub result: BatchResult,
    /// `Some` 表示被用户中断
    pub interrupted: Option<Interruption>,
}

/// 中断时询问是否保留未完成的输出
pub trait Confirm {
    fn keep_unfinished(&self, path: &Path) -> Result<bool>;
}

/// 单个文件的处理走向
enum Step {
    Done(ProcessResult),
    Interrupted,
}

/// 批量执行器
pub struct BatchRunner<'a> {
    config: &'a RunConfig,
    transcoder: &'a dyn Transcoder,
    confirm: &'a dyn Confirm,
    cancelled: Arc<AtomicBool>,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(
        config: &'a RunConfig,
        transcoder: &'a dyn Transcoder,
        confirm: &'a dyn Confirm,
        cancelled: Arc<AtomicBool>,
    ) -> Self {
        Self {
            config,
            transcoder,
            confirm,
            cancelled,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// 顺序处理文件列表
    pub fn run(&self, files: &[PathBuf]) -> RunReport {
        let mut result = BatchResult::default();

        for input in files {
            if self.is_cancelled() {
                output::print_warning("Interrupted between files, nothing in progress");
                return RunReport {
                    result,
                    interrupted: Some(Interruption {
                        unfinished: None,
                        removed: false,
                    }),
                };
            }

            let output_path = self.config.output_path(input);
            output::print_info(&format!(
                "Found \"{}\", converting to \"{}\"",
                file_name(input),
                self.config.output
            ));

            match self.process(input, &output_path) {
                Step::Done(outcome) => {
                    self.report(input, &outcome);
                    result.merge(input, outcome);
                }
                Step::Interrupted => {
                    let interruption = self.clean_up(&output_path);
                    return RunReport {
                        result,
                        interrupted: Some(interruption),
                    };
                }
            }
            output::print_separator();
        }

        RunReport {
            result,
            interrupted: None,
        }
    }

    fn process(&self, input: &Path, output_path: &Path) -> Step {
        if output_path.exists() {
            return Step::Done(ProcessResult::Skipped {
                output: output_path.to_path_buf(),
            });
        }

        if !input.exists() {
            return Step::Done(ProcessResult::Missing);
        }

        // 占用成功后该路径上的文件只可能来自本次转换
        match claim_output(output_path) {
            Ok(true) => {}
            Ok(false) => {
                return Step::Done(ProcessResult::Skipped {
                    output: output_path.to_path_buf(),
                })
            }
            Err(e) => {
                log::error!("Could not create {}: {}", output_path.display(), e);
                return Step::Done(ProcessResult::Failed {
                    reason: format!("cannot create \"{}\": {}", file_name(output_path), e),
                });
            }
        }

        let spinner = progress::create_spinner(&format!(
            "{} {}",
            self.transcoder.name(),
            file_name(input)
        ));
        let status = self.transcoder.transcode(input, output_path);
        spinner.finish_and_clear();

        match status {
            Ok(TranscodeStatus::Success) => Step::Done(self.finish(input, output_path)),
            _ if self.is_cancelled() => Step::Interrupted,
            Ok(TranscodeStatus::Failed { code, stderr }) => {
                discard(output_path);
                let code = code.map_or_else(|| "none".to_string(), |c| c.to_string());
                log::error!(
                    "{} failed on {} (exit code {}):\n{}",
                    self.transcoder.name(),
                    input.display(),
                    code,
                    stderr
                );
                let detail = stderr.lines().last().unwrap_or("no diagnostic output");
                Step::Done(ProcessResult::Failed {
                    reason: format!("exit code {}: {}", code, detail),
                })
            }
            Err(e) => {
                discard(output_path);
                log::error!("{} on {}", e, input.display());
                Step::Done(ProcessResult::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// 转码成功后确认输出非空，再按配置删除原文件
    fn finish(&self, input: &Path, output_path: &Path) -> ProcessResult {
        let produced = fs::metadata(output_path).map(|m| m.len() > 0).unwrap_or(false);
        if !produced {
            discard(output_path);
            log::error!(
                "{} reported success for {} but {} is missing or empty",
                self.transcoder.name(),
                input.display(),
                output_path.display()
            );
            return ProcessResult::Failed {
                reason: "converter reported success but produced no output".to_string(),
            };
        }

        let source_removed = if self.config.keep_originals {
            false
        } else {
            match fs::remove_file(input) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Could not delete {}: {}", input.display(), e);
                    output::print_warning(&format!(
                        "Could not delete original \"{}\": {}",
                        file_name(input),
                        e
                    ));
                    false
                }
            }
        };

        ProcessResult::Converted {
            output: output_path.to_path_buf(),
            source_removed,
        }
    }

    /// 中断后只处理正在生成的那一个输出文件
    fn clean_up(&self, unfinished: &Path) -> Interruption {
        output::print_warning("Keyboard interrupt detected");
        log::warn!("Interrupted while converting to {}", unfinished.display());

        if !unfinished.exists() {
            return Interruption {
                unfinished: None,
                removed: false,
            };
        }

        let keep = self.confirm.keep_unfinished(unfinished).unwrap_or_else(|e| {
            output::print_warning(&format!("{}; removing the unfinished file", e));
            false
        });

        if keep {
            output::print_info(&format!("Keeping \"{}\"", unfinished.display()));
            return Interruption {
                unfinished: Some(unfinished.to_path_buf()),
                removed: false,
            };
        }

        let removed = match fs::remove_file(unfinished) {
            Ok(()) => {
                output::print_info(&format!("\"{}\" deleted", unfinished.display()));
                true
            }
            Err(e) => {
                log::error!("Could not delete {}: {}", unfinished.display(), e);
                output::print_error(&format!(
                    "Could not delete \"{}\": {}",
                    unfinished.display(),
                    e
                ));
                false
            }
        };

        Interruption {
            unfinished: Some(unfinished.to_path_buf()),
            removed,
        }
    }

    fn report(&self, input: &Path, outcome: &ProcessResult) {
        match outcome {
            ProcessResult::Converted {
                output: converted,
                source_removed,
            } => {
                output::print_conversion(&file_name(input), &file_name(converted));
                if *source_removed {
                    output::print_info(&format!("The original file \"{}\" is deleted", file_name(input)));
                }
            }
            ProcessResult::Skipped { output: existing } => output::print_skip(&format!(
                "\"{}\" already exists, leaving \"{}\" untouched",
                file_name(existing),
                file_name(input)
            )),
            ProcessResult::Failed { reason } => output::print_fail(&format!(
                "\"{}\": {} (original kept)",
                file_name(input),
                reason
            )),
            ProcessResult::Missing => output::print_warning(&format!(
                "\"{}\" has disappeared, moving on",
                file_name(input)
            )),
        }
    }
}

/// 以 `create_new` 原子地占用输出路径，路径已存在时返回 `false`
fn claim_output(path: &Path) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

/// 删除本次转换占用或写出的输出
fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove {}: {}", path.display(), e),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
