//! # 列表模式
//!
//! `--list`：只列出候选文件及其输出路径，不做任何转换。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `tabled` 输出表格

use crate::models::RunConfig;
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 候选文件行
#[derive(Debug, Clone, Tabled)]
struct CandidateRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Action")]
    action: &'static str,
}

fn rows(config: &RunConfig, files: &[PathBuf]) -> Vec<CandidateRow> {
    files
        .iter()
        .map(|file| {
            let target = config.output_path(file);
            CandidateRow {
                file: display_name(file),
                action: if target.exists() { "skip (exists)" } else { "convert" },
                output: display_name(&target),
            }
        })
        .collect()
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// 打印候选文件
pub fn print_candidates(config: &RunConfig, files: &[PathBuf]) {
    if files.is_empty() {
        output::print_warning(&format!(
            "No '{}' files in {}",
            config.input,
            config.directory.display()
        ));
        return;
    }

    println!("{}", Table::new(rows(config, files)));
    output::print_done(&format!("{} candidate file(s)", files.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rows_mark_existing_outputs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.mp3"), b"x").unwrap();
        let config = RunConfig::new("webm", "mp3", dir.path(), true, true).unwrap();
        let files = vec![dir.path().join("a.webm"), dir.path().join("b.webm")];

        let rows = rows(&config, &files);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].file, "a.webm");
        assert_eq!(rows[0].output, "a.mp3");
        assert_eq!(rows[0].action, "convert");
        assert_eq!(rows[1].action, "skip (exists)");
    }
}
