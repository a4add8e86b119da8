// Tracing log adapter - Structured logging using tracing crate

use crate::ports::*;
use async_trait::async_trait;
use tracing::{debug, error, info, warn};

/// Tracing log adapter
pub struct TracingLogAdapter {
    current_level: LogLevel,
}

impl TracingLogAdapter {
    /// Create new tracing log adapter.
    ///
    /// The subscriber itself is installed by `utils::logging::init_logging`.
    pub fn new(current_level: LogLevel) -> Self {
        Self { current_level }
    }

    /// Check if log level should be logged
    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.current_level
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

#[async_trait]
impl LogPort for TracingLogAdapter {
    async fn info(&self, message: &str) {
        if self.should_log(LogLevel::Info) {
            info!(target: "webclip", "{}", message);
        }
    }

    async fn warn(&self, message: &str) {
        if self.should_log(LogLevel::Warn) {
            warn!(target: "webclip", "{}", message);
        }
    }

    async fn error(&self, message: &str) {
        if self.should_log(LogLevel::Error) {
            error!(target: "webclip", "{}", message);
        }
    }

    async fn debug(&self, message: &str) {
        if self.should_log(LogLevel::Debug) {
            debug!(target: "webclip", "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_log_threshold() {
        let adapter = TracingLogAdapter::new(LogLevel::Warn);
        assert!(adapter.should_log(LogLevel::Error));
        assert!(adapter.should_log(LogLevel::Warn));
        assert!(!adapter.should_log(LogLevel::Info));
        assert!(!adapter.should_log(LogLevel::Debug));
    }
}
