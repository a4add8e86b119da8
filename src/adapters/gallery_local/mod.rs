//! Local media-library adapter
//!
//! Imports a video from the host filesystem into the temp root, the way the
//! native library picker hands out a scratch copy of the selected item.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::utils::path::PathUtils;

/// Library picker over a source file given up front; `None` behaves like a dismissed picker
pub struct LocalGalleryAdapter {
    platform: Platform,
    temp_dir: String,
    selected_source: Option<String>,
    clock_port: Arc<dyn ClockPort>,
}

impl LocalGalleryAdapter {
    pub fn new(
        platform: Platform,
        roots: &StorageRoots,
        selected_source: Option<String>,
        clock_port: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            platform,
            temp_dir: roots.temp_dir.clone(),
            selected_source,
            clock_port,
        }
    }

    /// Path as the platform picker reports it.
    ///
    /// Android returns a `file://` URI with a cache-busting query string.
    fn platform_path(&self, name: &str) -> String {
        match self.platform {
            Platform::Android => format!(
                "file://{}{}?{}",
                self.temp_dir,
                name,
                self.clock_port.now_millis()
            ),
            Platform::Ios | Platform::Other => format!("{}{}", self.temp_dir, name),
        }
    }

    /// Whether both paths resolve to the same file on disk
    async fn is_same_file(source: &Path, destination: &Path) -> bool {
        let Ok(destination) = fs::canonicalize(destination).await else {
            return false;
        };
        match fs::canonicalize(source).await {
            Ok(source) => source == destination,
            Err(_) => false,
        }
    }
}

#[async_trait]
impl GalleryPort for LocalGalleryAdapter {
    async fn get_picture(&self, request: &GalleryRequest) -> Result<Option<String>, DomainError> {
        let Some(source) = self.selected_source.as_deref() else {
            return Ok(None);
        };
        let source = PathUtils::strip_file_scheme(source);

        if request.media_type == MediaType::Video && PathUtils::video_mime_type(source).is_none() {
            return Err(DomainError::PickerFail(format!("Not a video file: {}", source)));
        }

        let name = PathUtils::get_file_name(source)
            .ok_or_else(|| DomainError::PickerFail(format!("Path has no file name: {}", source)))?;
        let destination = Path::new(&self.temp_dir).join(&name);

        if !Self::is_same_file(Path::new(source), &destination).await {
            fs::copy(source, &destination).await.map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DomainError::FileNotFound(source.to_string()),
                _ => DomainError::PickerFail(format!("Failed to import {}: {}", source, e)),
            })?;
        }
        if request.save_to_photo_album {
            tracing::warn!("Saving back to the library is not supported; ignoring");
        }

        Ok(Some(self.platform_path(&name)))
    }
}
