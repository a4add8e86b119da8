// Resolve interactor - Turns a pick action into input/output paths

use std::sync::Arc;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::NamingRules;
use crate::ports::*;

/// Header of the alert shown on chooser failures
pub const ALERT_HEADER: &str = "Alert";

/// Interactor for the video source resolution use case
pub struct VideoSourceResolver {
    platform: Platform,
    storage_port: Arc<dyn StoragePort>,
    chooser_port: Arc<dyn ChooserPort>,
    gallery_port: Arc<dyn GalleryPort>,
    clock_port: Arc<dyn ClockPort>,
    alert_port: Arc<dyn AlertPort>,
    log_port: Arc<dyn LogPort>,
}

impl VideoSourceResolver {
    /// Create new resolver with injected ports
    pub fn new(
        platform: Platform,
        storage_port: Arc<dyn StoragePort>,
        chooser_port: Arc<dyn ChooserPort>,
        gallery_port: Arc<dyn GalleryPort>,
        clock_port: Arc<dyn ClockPort>,
        alert_port: Arc<dyn AlertPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            platform,
            storage_port,
            chooser_port,
            gallery_port,
            clock_port,
            alert_port,
            log_port,
        }
    }

    /// Pick a file through the constrained chooser.
    ///
    /// Chooser failures are shown to the user and come back as `Failed`; they never propagate.
    pub async fn resolve_from_chooser(
        &self,
        max_file_size: u64,
        mime_types: &[String],
    ) -> PickOutcome<VideoSelection> {
        let request = match ChooserRequest::new(max_file_size, mime_types) {
            Ok(request) => request,
            Err(e) => return self.report_failure(PickFailure::ReadError(e.to_string())).await,
        };

        self.log_port
            .debug(&format!(
                "Opening chooser (types: {}, max size: {} bytes)",
                request.joined_mime_types(),
                request.max_file_size
            ))
            .await;

        match self.chooser_port.get_file(&request).await {
            Ok(Some(file)) => {
                let output_name = NamingRules::chooser_output_name(&file.name, self.clock_port.now_millis());
                let selection = VideoSelection {
                    input_file_path: file.path,
                    output_file_path: self.storage_port.roots().temp_path(&output_name),
                };
                self.log_port
                    .info(&format!(
                        "Chooser selection resolved: {} -> {}",
                        selection.input_file_path, selection.output_file_path
                    ))
                    .await;
                PickOutcome::Selected(selection)
            }
            Ok(None) => {
                self.log_port.debug("Chooser dismissed without a selection").await;
                PickOutcome::Cancelled
            }
            Err(failure) => self.report_failure(failure).await,
        }
    }

    /// Pick a video from the media library.
    ///
    /// On Android the picked file is renamed to `{millis}.{ext}` inside the temp root.
    pub async fn resolve_from_gallery(&self) -> Result<PickOutcome<VideoSelection>, DomainError> {
        let request = GalleryRequest::video_library();
        let raw_path = match self.gallery_port.get_picture(&request).await? {
            Some(raw_path) => raw_path,
            None => {
                self.log_port.debug("Gallery dismissed without a selection").await;
                return Ok(PickOutcome::Cancelled);
            }
        };

        let roots = self.storage_port.roots();
        let mut current_name = NamingRules::gallery_file_name(&raw_path, self.platform)?;

        if NamingRules::requires_rename(self.platform) {
            let new_name = NamingRules::stable_name(&current_name, self.clock_port.now_millis())?;
            self.storage_port
                .move_file(&roots.temp_dir, &current_name, &roots.temp_dir, &new_name)
                .await?;
            self.log_port
                .debug(&format!("Renamed gallery file {} to {}", current_name, new_name))
                .await;
            current_name = new_name;
        }

        let output_name = NamingRules::gallery_output_name(self.clock_port.now_millis());
        let selection = VideoSelection {
            input_file_path: roots.temp_path(&current_name),
            output_file_path: roots.temp_path(&output_name),
        };
        self.log_port
            .info(&format!(
                "Gallery selection resolved: {} -> {}",
                selection.input_file_path, selection.output_file_path
            ))
            .await;

        Ok(PickOutcome::Selected(selection))
    }

    async fn report_failure(&self, failure: PickFailure) -> PickOutcome<VideoSelection> {
        self.log_port.error(&format!("Chooser failed: {}", failure)).await;
        self.alert_port.present(ALERT_HEADER, failure.alert_message()).await;
        PickOutcome::Failed(failure)
    }
}
