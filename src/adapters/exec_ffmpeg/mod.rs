//! FFmpeg execution adapter
//!
//! Drives the `ffmpeg` and `ffprobe` executables as child processes.

use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFmpeg/FFprobe process adapter
pub struct FFmpegAdapter {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl FFmpegAdapter {
    /// Create new adapter for the given executables
    pub fn new(ffmpeg_path: impl Into<String>, ffprobe_path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Convert ffprobe's JSON report into a probe result
    pub fn parse_probe_output(file_path: &str, stdout: &[u8]) -> Result<MediaProbeResult, DomainError> {
        let report: FfprobeReport = serde_json::from_slice(stdout)
            .map_err(|e| DomainError::ProbeFail(format!("Unreadable ffprobe output for {}: {}", file_path, e)))?;

        let format = report.format.ok_or_else(|| {
            DomainError::ProbeFail(format!("No container format reported for {}", file_path))
        })?;

        let streams = report
            .streams
            .into_iter()
            .map(|s| ProbeStream {
                index: s.index,
                codec_type: s.codec_type.unwrap_or_else(|| "unknown".to_string()),
                codec_name: s.codec_name.unwrap_or_else(|| "unknown".to_string()),
                width: s.width,
                height: s.height,
            })
            .collect();

        Ok(MediaProbeResult {
            path: file_path.to_string(),
            format: format.format_name,
            duration_seconds: format
                .duration
                .as_deref()
                .and_then(|d| d.parse::<f64>().ok())
                .filter(|d| d.is_finite() && *d >= 0.0),
            size_bytes: format.size.as_deref().and_then(|s| s.parse().ok()),
            bit_rate: format.bit_rate.as_deref().and_then(|b| b.parse().ok()),
            streams,
        })
    }

    /// Last non-empty line of a process' stderr
    fn stderr_summary(stderr: &[u8]) -> String {
        String::from_utf8_lossy(stderr)
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("no diagnostic output")
            .trim()
            .to_string()
    }
}

#[async_trait]
impl TranscodePort for FFmpegAdapter {
    async fn probe(&self, file_path: &str) -> Result<MediaProbeResult, DomainError> {
        tracing::debug!("Probing {} with {}", file_path, self.ffprobe_path);

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error"])
            .args(["-print_format", "json"])
            .args(["-show_format", "-show_streams"])
            .arg(file_path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| DomainError::ProbeFail(format!("Failed to start {}: {}", self.ffprobe_path, e)))?;

        if !output.status.success() {
            return Err(DomainError::ProbeFail(format!(
                "{} exited with {}: {}",
                self.ffprobe_path,
                output.status,
                Self::stderr_summary(&output.stderr)
            )));
        }

        Self::parse_probe_output(file_path, &output.stdout)
    }

    async fn exec(&self, command: &EncodeCommand) -> Result<(), DomainError> {
        tracing::debug!("Executing {} {}", self.ffmpeg_path, command);

        let output = Command::new(&self.ffmpeg_path)
            .args(["-hide_banner", "-nostdin", "-y"])
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DomainError::EncodeFail(format!("Failed to start {}: {}", self.ffmpeg_path, e)))?;

        if !output.status.success() {
            return Err(DomainError::EncodeFail(format!(
                "{} exited with {}: {}",
                self.ffmpeg_path,
                output.status,
                Self::stderr_summary(&output.stderr)
            )));
        }

        Ok(())
    }
}

/// Subset of `ffprobe -print_format json -show_format -show_streams`
#[derive(Debug, Deserialize)]
struct FfprobeReport {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: u32,
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    format_name: String,
    duration: Option<String>,
    size: Option<String>,
    bit_rate: Option<String>,
}
