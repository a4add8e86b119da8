//! Command-line chooser adapter
//!
//! Stands in for the native file chooser: the "picked" file comes from the
//! command line, and the chooser's type and size constraints are enforced here.

use async_trait::async_trait;
use tokio::fs;

use crate::domain::model::*;
use crate::ports::*;
use crate::utils::path::PathUtils;

/// Chooser backed by a path given up front; `None` behaves like a dismissed dialog
pub struct CliChooserAdapter {
    selected_path: Option<String>,
}

impl CliChooserAdapter {
    pub fn new(selected_path: Option<String>) -> Self {
        Self { selected_path }
    }
}

#[async_trait]
impl ChooserPort for CliChooserAdapter {
    async fn get_file(&self, request: &ChooserRequest) -> Result<Option<ChosenFile>, PickFailure> {
        let Some(path) = self.selected_path.as_deref() else {
            return Ok(None);
        };

        let metadata = fs::metadata(path)
            .await
            .map_err(|e| PickFailure::ReadError(format!("Cannot read {}: {}", path, e)))?;
        if !metadata.is_file() {
            return Err(PickFailure::ReadError(format!("Not a regular file: {}", path)));
        }

        let mime_type = PathUtils::video_mime_type(path).unwrap_or("application/octet-stream");
        if !request.allows(mime_type) {
            return Err(PickFailure::ReadError(format!(
                "File type {} is not one of {}",
                mime_type,
                request.joined_mime_types()
            )));
        }

        if metadata.len() > request.max_file_size {
            tracing::debug!(
                "Chooser rejected {} ({} bytes > {} bytes)",
                path,
                metadata.len(),
                request.max_file_size
            );
            return Err(PickFailure::InvalidSize(INVALID_SIZE_MESSAGE.to_string()));
        }

        let name = PathUtils::get_stem(path)
            .ok_or_else(|| PickFailure::ReadError(format!("Path has no file name: {}", path)))?;

        Ok(Some(ChosenFile {
            path: path.to_string(),
            name,
        }))
    }
}
