//! WebClip Library
//!
//! Resolves a picked or captured video into an input path and a deterministic
//! MP4 output path, then hands both to ffmpeg with a fixed web-playback policy.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{
    EncodeCommand, EncodePolicy, MediaProbeResult, PickFailure, PickOutcome, Platform, StorageRoots,
    VideoSelection,
};
pub use domain::rules::{EncodeRules, NamingRules};
pub use error::{WebclipError, WebclipResult};
