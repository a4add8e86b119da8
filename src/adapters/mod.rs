// Adapters - External system implementations

pub mod chooser_cli;
pub mod exec_ffmpeg;
pub mod fs_local;
pub mod gallery_local;
pub mod system;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use chooser_cli::CliChooserAdapter;
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::LocalStorageAdapter;
pub use gallery_local::LocalGalleryAdapter;
pub use system::{StderrAlertAdapter, SystemClock};
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;
