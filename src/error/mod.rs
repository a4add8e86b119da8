//! Error handling module for WebClip

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for WebClip operations
#[derive(Error, Debug)]
pub enum WebclipError {
    /// Storage roots could not be resolved at startup
    #[error("Failed to resolve storage roots: {message}")]
    PlatformNotReady { message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    /// Error raised by the domain or one of its ports
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for WebClip operations
pub type WebclipResult<T> = std::result::Result<T, WebclipError>;
