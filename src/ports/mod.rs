// Ports - Interface definitions (contracts)

use crate::domain::errors::*;
use crate::domain::model::*;
use async_trait::async_trait;

/// Port for the storage service
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Persistent and scratch roots resolved at startup
    fn roots(&self) -> &StorageRoots;

    /// Move `from_dir + from_name` to `to_dir + to_name`; fails if the source does not exist
    async fn move_file(
        &self,
        from_dir: &str,
        from_name: &str,
        to_dir: &str,
        to_name: &str,
    ) -> Result<(), DomainError>;

    /// Check if file exists
    async fn file_exists(&self, file_path: &str) -> Result<bool, DomainError>;
}

/// Port for the constrained file chooser
#[async_trait]
pub trait ChooserPort: Send + Sync {
    /// Let the user pick a file; `Ok(None)` means the user cancelled
    async fn get_file(&self, request: &ChooserRequest) -> Result<Option<ChosenFile>, PickFailure>;
}

/// Port for the media-library picker
#[async_trait]
pub trait GalleryPort: Send + Sync {
    /// Let the user pick a library item; returns the raw platform path, `None` on cancel
    async fn get_picture(&self, request: &GalleryRequest) -> Result<Option<String>, DomainError>;
}

/// Port for the transcoding engine
#[async_trait]
pub trait TranscodePort: Send + Sync {
    /// Extract metadata from a media file
    async fn probe(&self, file_path: &str) -> Result<MediaProbeResult, DomainError>;

    /// Run a transcoding command; the output file is written as a side effect
    async fn exec(&self, command: &EncodeCommand) -> Result<(), DomainError>;
}

/// Port for wall-clock time
pub trait ClockPort: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Port for user-facing modal alerts
#[async_trait]
pub trait AlertPort: Send + Sync {
    /// Present an alert and wait until it is dismissed
    async fn present(&self, header: &str, message: &str);
}

/// Port for logging and observability
#[async_trait]
pub trait LogPort: Send + Sync {
    /// Log info message
    async fn info(&self, message: &str);

    /// Log warning message
    async fn warn(&self, message: &str);

    /// Log error message
    async fn error(&self, message: &str);

    /// Log debug message
    async fn debug(&self, message: &str);
}

/// Port for configuration management
pub trait ConfigPort: Send + Sync {
    /// Get configuration value
    fn get_config(&self, key: &str) -> Option<String>;

    /// Get configuration value with default
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config(key).unwrap_or_else(|| default.to_string())
    }

    /// Set configuration value
    fn set_config(&self, key: &str, value: &str);

    /// Load configuration from file
    fn load_config(&self, file_path: &str) -> Result<(), DomainError>;
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse log level from string
    pub fn parse(level_str: &str) -> Result<Self, DomainError> {
        match level_str.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
                level_str
            ))),
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
