use std::sync::Arc;

use crate::adapters::{
    CliChooserAdapter, FFmpegAdapter, LocalGalleryAdapter, LocalStorageAdapter, StderrAlertAdapter,
    SystemClock, TracingLogAdapter,
};
use crate::app::{HomeScreenInteractor, VideoSourceResolver};
use crate::config_initialization::Settings;
use crate::error::{WebclipError, WebclipResult};
use crate::ports::{AlertPort, ChooserPort, ClockPort, GalleryPort, LogPort, StoragePort, TranscodePort};

/// What the user picks in each picker; `None` dismisses it
#[derive(Debug, Clone, Default)]
pub struct PickerInputs {
    pub chooser_file: Option<String>,
    pub gallery_source: Option<String>,
}

impl PickerInputs {
    pub fn chooser(file: Option<String>) -> Self {
        Self {
            chooser_file: file,
            gallery_source: None,
        }
    }

    pub fn gallery(source: Option<String>) -> Self {
        Self {
            chooser_file: None,
            gallery_source: source,
        }
    }
}

pub trait AppContainer: Send + Sync {
    fn home_screen(&self) -> Arc<HomeScreenInteractor>;
    fn storage(&self) -> Arc<dyn StoragePort>;
}

pub struct DefaultAppContainer {
    home_screen: Arc<HomeScreenInteractor>,
    storage: Arc<dyn StoragePort>,
}

impl DefaultAppContainer {
    /// Resolve storage roots and wire every adapter; fails if the platform is not ready
    pub async fn ready(settings: &Settings, inputs: PickerInputs) -> WebclipResult<Self> {
        let storage = Arc::new(
            LocalStorageAdapter::ready(
                settings.platform,
                settings.files_dir.as_deref(),
                settings.temp_dir.as_deref(),
            )
            .await
            .map_err(|e| WebclipError::PlatformNotReady {
                message: e.to_string(),
            })?,
        );
        let clock = Arc::new(SystemClock);
        let log_port = Arc::new(TracingLogAdapter::new(settings.log_level));
        let chooser = Arc::new(CliChooserAdapter::new(inputs.chooser_file));
        let gallery = Arc::new(LocalGalleryAdapter::new(
            settings.platform,
            storage.roots(),
            inputs.gallery_source,
            Arc::clone(&clock) as Arc<dyn ClockPort>,
        ));
        let transcoder = Arc::new(FFmpegAdapter::new(
            settings.ffmpeg_path.clone(),
            settings.ffprobe_path.clone(),
        ));

        let resolver = Arc::new(VideoSourceResolver::new(
            settings.platform,
            Arc::clone(&storage) as Arc<dyn StoragePort>,
            chooser as Arc<dyn ChooserPort>,
            gallery as Arc<dyn GalleryPort>,
            clock as Arc<dyn ClockPort>,
            Arc::new(StderrAlertAdapter) as Arc<dyn AlertPort>,
            Arc::clone(&log_port) as Arc<dyn LogPort>,
        ));

        let home_screen = Arc::new(HomeScreenInteractor::new(
            resolver,
            transcoder as Arc<dyn TranscodePort>,
            log_port as Arc<dyn LogPort>,
            settings.screen_settings(),
        ));

        Ok(Self {
            home_screen,
            storage: storage as Arc<dyn StoragePort>,
        })
    }
}

impl AppContainer for DefaultAppContainer {
    fn home_screen(&self) -> Arc<HomeScreenInteractor> {
        Arc::clone(&self.home_screen)
    }

    fn storage(&self) -> Arc<dyn StoragePort> {
        Arc::clone(&self.storage)
    }
}
