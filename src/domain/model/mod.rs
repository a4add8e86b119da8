// Domain models - Core types and data structures

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::domain::errors::DomainError;

/// Host platform family, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Platform {
    /// Parse platform from string
    pub fn parse(platform_str: &str) -> Result<Self, DomainError> {
        match platform_str.trim().to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "other" | "desktop" => Ok(Platform::Other),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid platform: {}. Valid platforms: android, ios, other",
                platform_str
            ))),
        }
    }

    /// Platform family of the running host
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "android" => Platform::Android,
            "ios" => Platform::Ios,
            _ => Platform::Other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Persistent and scratch directories, resolved once at platform-ready time.
///
/// Both roots end with a path separator so file names can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRoots {
    pub files_dir: String,
    pub temp_dir: String,
}

impl StorageRoots {
    /// Create storage roots, normalizing the trailing separator
    pub fn new(files_dir: impl Into<String>, temp_dir: impl Into<String>) -> Result<Self, DomainError> {
        let files_dir = files_dir.into();
        let temp_dir = temp_dir.into();
        if files_dir.is_empty() || temp_dir.is_empty() {
            return Err(DomainError::BadArgs("Storage roots cannot be empty".to_string()));
        }
        Ok(Self {
            files_dir: with_trailing_separator(files_dir),
            temp_dir: with_trailing_separator(temp_dir),
        })
    }

    /// Path of `name` inside the temp root
    pub fn temp_path(&self, name: &str) -> String {
        format!("{}{}", self.temp_dir, name)
    }
}

fn with_trailing_separator(mut dir: String) -> String {
    if !dir.ends_with('/') && !dir.ends_with(std::path::MAIN_SEPARATOR) {
        dir.push('/');
    }
    dir
}

/// Input and output paths for one transcoding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSelection {
    pub input_file_path: String,
    pub output_file_path: String,
}

/// Result of a picker interaction.
///
/// `Cancelled` is not an error; `Failed` has already been reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome<T> {
    Selected(T),
    Cancelled,
    Failed(PickFailure),
}

impl<T> PickOutcome<T> {
    /// Selected value, if any
    pub fn selected(self) -> Option<T> {
        match self {
            PickOutcome::Selected(value) => Some(value),
            _ => None,
        }
    }
}

/// Failures reported by the constrained chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickFailure {
    /// Selected file exceeds the size ceiling; carries the picker's own message
    InvalidSize(String),
    /// Any other picker failure
    ReadError(String),
}

impl PickFailure {
    /// Message shown to the user in the alert
    pub fn alert_message(&self) -> &str {
        match self {
            PickFailure::InvalidSize(message) => message,
            PickFailure::ReadError(_) => READ_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for PickFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickFailure::InvalidSize(msg) => write!(f, "Invalid size: {}", msg),
            PickFailure::ReadError(msg) => write!(f, "Read error: {}", msg),
        }
    }
}

/// Message the chooser reports when the file exceeds the ceiling
pub const INVALID_SIZE_MESSAGE: &str = "Invalid size";

/// Fixed alert text for generic chooser failures
pub const READ_ERROR_MESSAGE: &str = "Error while reading file";

/// File returned by the constrained chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenFile {
    pub path: String,
    pub name: String,
}

/// Filter handed to the constrained chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserRequest {
    pub mime_types: Vec<String>,
    pub max_file_size: u64,
}

impl ChooserRequest {
    /// Create new chooser request with validation
    pub fn new(max_file_size: u64, mime_types: &[String]) -> Result<Self, DomainError> {
        if max_file_size == 0 {
            return Err(DomainError::BadArgs("Maximum file size must be positive".to_string()));
        }
        if mime_types.is_empty() {
            return Err(DomainError::BadArgs("At least one MIME type is required".to_string()));
        }
        Ok(Self {
            mime_types: mime_types.to_vec(),
            max_file_size,
        })
    }

    /// MIME filter in the comma-joined form the chooser expects
    pub fn joined_mime_types(&self) -> String {
        self.mime_types.join(",")
    }

    pub fn allows(&self, mime_type: &str) -> bool {
        self.mime_types.iter().any(|m| m.eq_ignore_ascii_case(mime_type))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureSourceType {
    PhotoLibrary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Video,
}

/// Options handed to the media-library picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRequest {
    pub source_type: PictureSourceType,
    pub save_to_photo_album: bool,
    pub media_type: MediaType,
}

impl GalleryRequest {
    /// Library pick restricted to videos, never saved back to the album
    pub fn video_library() -> Self {
        Self {
            source_type: PictureSourceType::PhotoLibrary,
            save_to_photo_album: false,
            media_type: MediaType::Video,
        }
    }
}

/// Stream description reported by a probe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeStream {
    pub index: u32,
    pub codec_type: String,
    pub codec_name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Media metadata returned by the transcoding engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaProbeResult {
    pub path: String,
    pub format: String,
    pub duration_seconds: Option<f64>,
    pub size_bytes: Option<u64>,
    pub bit_rate: Option<u64>,
    pub streams: Vec<ProbeStream>,
}

impl MediaProbeResult {
    /// First video stream, if any
    pub fn primary_video_stream(&self) -> Option<&ProbeStream> {
        self.streams.iter().find(|s| s.codec_type == "video")
    }

    /// Dimensions of the primary video stream
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let video = self.primary_video_stream()?;
        Some((video.width?, video.height?))
    }
}

/// Fixed re-encode policy for web playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodePolicy {
    pub scale_max_width: u32,
    pub scale_max_height: u32,
    pub preset: String,
    pub fast_start: bool,
    pub video_codec: String,
}

impl Default for EncodePolicy {
    fn default() -> Self {
        Self {
            scale_max_width: 1280,
            scale_max_height: 1280,
            preset: "veryfast".to_string(),
            fast_start: true,
            video_codec: "libx264".to_string(),
        }
    }
}

impl EncodePolicy {
    /// Validate policy values
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.scale_max_width == 0 || self.scale_max_height == 0 {
            return Err(DomainError::BadArgs("Scale bounds must be positive".to_string()));
        }
        if self.preset.trim().is_empty() || self.preset.contains(char::is_whitespace) {
            return Err(DomainError::BadArgs(format!("Invalid encoding preset: '{}'", self.preset)));
        }
        if self.video_codec.trim().is_empty() || self.video_codec.contains(char::is_whitespace) {
            return Err(DomainError::BadArgs(format!("Invalid video codec: '{}'", self.video_codec)));
        }
        Ok(())
    }

    /// Scale filter that fits the frame inside the bounds without upscaling
    pub fn scale_filter(&self) -> String {
        format!(
            "scale=w={}:h={}:force_original_aspect_ratio=decrease",
            self.scale_max_width, self.scale_max_height
        )
    }
}

/// Transcoding command as an ordered argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeCommand {
    pub args: Vec<String>,
}

impl EncodeCommand {
    /// Output path (last argument)
    pub fn output_path(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

impl fmt::Display for EncodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

#[cfg(test)]
mod tests;
