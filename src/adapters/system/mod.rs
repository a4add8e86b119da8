// System adapters - Wall clock and terminal alerts

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::ports::*;

/// Clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Alert adapter that prints the modal to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAlertAdapter;

impl StderrAlertAdapter {
    fn render(header: &str, message: &str) -> String {
        format!("[{}] {}\n", header, message)
    }
}

#[async_trait]
impl AlertPort for StderrAlertAdapter {
    async fn present(&self, header: &str, message: &str) {
        let mut stderr = tokio::io::stderr();
        if let Err(e) = stderr.write_all(Self::render(header, message).as_bytes()).await {
            tracing::warn!("Failed to present alert: {}", e);
        }
        let _ = stderr.flush().await;
    }
}
