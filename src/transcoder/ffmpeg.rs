//! # FFmpeg 转码器
//!
//! 通过子进程调用 `ffmpeg` 完成单个文件的转换。
//!
//! ## 依赖关系
//! - 实现 `transcoder::Transcoder`
//! - 被 `commands/convert.rs` 创建

use super::{TranscodeStatus, Transcoder};
use crate::error::{AudioconvError, Result};

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// FFmpeg 调用封装
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: String,
}

impl Ffmpeg {
    /// 检查程序是否可用（运行 `-version`），不可用时返回 `CommandNotFound`
    pub fn locate(program: &str) -> Result<Self> {
        let status = Command::new(program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(s) if s.success() => Ok(Self {
                program: program.to_string(),
            }),
            Ok(_) => Err(AudioconvError::CommandNotFound {
                command: program.to_string(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AudioconvError::CommandNotFound {
                command: program.to_string(),
            }),
            Err(e) => Err(AudioconvError::CommandSpawnError {
                command: program.to_string(),
                source: e,
            }),
        }
    }

    /// 构建单次转换的命令
    ///
    /// 输出路径已由执行器以空文件占用，`-y` 只覆盖该占位文件；
    /// `-nostdin` 让出终端给中断提示。
    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-hide_banner", "-nostdin", "-y", "-i"])
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Transcoder for Ffmpeg {
    fn name(&self) -> &str {
        &self.program
    }

    fn transcode(&self, input: &Path, output: &Path) -> Result<TranscodeStatus> {
        let out = self
            .command(input, output)
            .output()
            .map_err(|e| AudioconvError::CommandSpawnError {
                command: self.program.clone(),
                source: e,
            })?;

        if out.status.success() {
            Ok(TranscodeStatus::Success)
        } else {
            Ok(TranscodeStatus::Failed {
                code: out.status.code(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_arguments() {
        let ffmpeg = Ffmpeg {
            program: "ffmpeg".to_string(),
        };
        let cmd = ffmpeg.command(Path::new("in put.webm"), Path::new("in put.mp3"));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec!["-hide_banner", "-nostdin", "-y", "-i", "in put.webm", "in put.mp3"]
        );
        assert_eq!(cmd.get_program(), "ffmpeg");
    }

    #[test]
    fn test_locate_missing_program() {
        let err = Ffmpeg::locate("audioconv-no-such-ffmpeg-binary").unwrap_err();
        assert!(matches!(err, AudioconvError::CommandNotFound { .. }));
    }
}
