//! Path and file-type helpers shared by the picker adapters

use std::path::Path;

/// Video extensions and the MIME type a platform picker reports for them
const VIDEO_MIME_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("qt", "video/quicktime"),
    ("3gp", "video/3gpp"),
    ("3g2", "video/3gpp2"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("ts", "video/mp2t"),
];

/// Path utilities
pub struct PathUtils;

impl PathUtils {
    /// Get file extension from path, lowercased
    pub fn get_extension(path: &str) -> Option<String> {
        Path::new(path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Get file stem (name without extension) from path
    pub fn get_stem(path: &str) -> Option<String> {
        Path::new(path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
    }

    /// Get file name from path
    pub fn get_file_name(path: &str) -> Option<String> {
        Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
    }

    /// MIME type of a video file, judged by its extension
    pub fn video_mime_type(path: &str) -> Option<&'static str> {
        let extension = Self::get_extension(path)?;
        VIDEO_MIME_TYPES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, mime)| *mime)
    }

    /// Strip a `file://` scheme, if present
    pub fn strip_file_scheme(path: &str) -> &str {
        path.strip_prefix("file://").unwrap_or(path)
    }
}
