// Screen interactor - The four pick-then-probe/encode actions of the home screen

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::app::resolve_interactor::VideoSourceResolver;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::EncodeRules;
use crate::ports::*;

/// Chooser filter and encode policy used by the screen
#[derive(Debug, Clone)]
pub struct ScreenSettings {
    pub max_file_size: u64,
    pub mime_types: Vec<String>,
    pub encode_policy: EncodePolicy,
}

/// What the screen displays after an action
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenState {
    pub video_information: Option<MediaProbeResult>,
    pub encoded_src: Option<String>,
    pub loading: bool,
}

/// Interactor backing the home screen controls.
///
/// Probe and encode failures are logged and swallowed; the user sees no error for them.
pub struct HomeScreenInteractor {
    resolver: Arc<VideoSourceResolver>,
    transcode_port: Arc<dyn TranscodePort>,
    log_port: Arc<dyn LogPort>,
    settings: ScreenSettings,
    state: Mutex<ScreenState>,
}

impl HomeScreenInteractor {
    /// Create new screen interactor with injected ports
    pub fn new(
        resolver: Arc<VideoSourceResolver>,
        transcode_port: Arc<dyn TranscodePort>,
        log_port: Arc<dyn LogPort>,
        settings: ScreenSettings,
    ) -> Self {
        Self {
            resolver,
            transcode_port,
            log_port,
            settings,
            state: Mutex::new(ScreenState::default()),
        }
    }

    /// Snapshot of the current screen state
    pub fn state(&self) -> ScreenState {
        self.lock_state().clone()
    }

    /// Chooser, then probe
    pub async fn select_and_probe(&self) -> Result<ScreenState, DomainError> {
        if let Some(selection) = self.choose().await {
            self.probe_video(&selection.input_file_path).await;
        }
        Ok(self.state())
    }

    /// Chooser, then encode
    pub async fn select_and_encode(&self) -> Result<ScreenState, DomainError> {
        if let Some(selection) = self.choose().await {
            self.encode_with_loader(&selection).await;
        }
        Ok(self.state())
    }

    /// Gallery, then probe
    pub async fn select_from_gallery_and_probe(&self) -> Result<ScreenState, DomainError> {
        if let Some(selection) = self.resolver.resolve_from_gallery().await?.selected() {
            self.probe_video(&selection.input_file_path).await;
        }
        Ok(self.state())
    }

    /// Gallery, then encode
    pub async fn select_from_gallery_and_encode(&self) -> Result<ScreenState, DomainError> {
        if let Some(selection) = self.resolver.resolve_from_gallery().await?.selected() {
            self.encode_with_loader(&selection).await;
        }
        Ok(self.state())
    }

    async fn choose(&self) -> Option<VideoSelection> {
        self.resolver
            .resolve_from_chooser(self.settings.max_file_size, &self.settings.mime_types)
            .await
            .selected()
    }

    async fn probe_video(&self, input_file_path: &str) {
        match self.transcode_port.probe(input_file_path).await {
            Ok(information) => {
                self.log_port
                    .info(&format!("Probed {}: {} streams", input_file_path, information.streams.len()))
                    .await;
                if information.primary_video_stream().is_none() {
                    self.log_port
                        .warn(&format!("{} has no video stream", input_file_path))
                        .await;
                }
                self.lock_state().video_information = Some(information);
            }
            Err(e) => self.log_port.error(&e.to_string()).await,
        }
    }

    async fn encode_with_loader(&self, selection: &VideoSelection) {
        self.set_loading(true).await;
        self.encode_video(&selection.input_file_path, &selection.output_file_path)
            .await;
        self.set_loading(false).await;
        // Set even when the encode failed.
        self.lock_state().encoded_src = Some(selection.output_file_path.clone());
    }

    async fn encode_video(&self, input_file_path: &str, output_file_path: &str) {
        let command = match EncodeRules::build_encode_command(
            input_file_path,
            output_file_path,
            &self.settings.encode_policy,
        ) {
            Ok(command) => command,
            Err(e) => {
                self.log_port.error(&e.to_string()).await;
                return;
            }
        };

        self.log_port.debug(&format!("Running transcode: {}", command)).await;
        match self.transcode_port.exec(&command).await {
            Ok(()) => {
                self.log_port
                    .info(&format!("Encoded {} -> {}", input_file_path, output_file_path))
                    .await
            }
            Err(e) => self.log_port.error(&e.to_string()).await,
        }
    }

    async fn set_loading(&self, loading: bool) {
        self.lock_state().loading = loading;
        self.log_port
            .debug(if loading { "Loading indicator shown" } else { "Loading indicator dismissed" })
            .await;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ScreenState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
