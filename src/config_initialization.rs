//! Configuration initialization and hierarchy management

use tracing::{debug, info};

use crate::app::ScreenSettings;
use crate::cli::{Cli, Commands};
use crate::domain::model::{EncodePolicy, Platform};
use crate::error::{WebclipError, WebclipResult};
use crate::ports::{ConfigPort, LogLevel};

/// Default chooser size ceiling in bytes
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100_000_000;

/// Default chooser MIME filter
pub const DEFAULT_MIME_TYPES: &[&str] = &["video/mp4", "video/quicktime"];

/// Environment variables and the config keys they override
const ENV_MAPPINGS: &[(&str, &str)] = &[
    ("WEBCLIP_PLATFORM", "platform"),
    ("WEBCLIP_FILES_DIR", "files_dir"),
    ("WEBCLIP_TEMP_DIR", "temp_dir"),
    ("WEBCLIP_MAX_FILE_SIZE", "max_file_size"),
    ("WEBCLIP_MIME_TYPES", "mime_types"),
    ("WEBCLIP_SCALE_MAX_WIDTH", "scale_max_width"),
    ("WEBCLIP_SCALE_MAX_HEIGHT", "scale_max_height"),
    ("WEBCLIP_PRESET", "preset"),
    ("WEBCLIP_FAST_START", "fast_start"),
    ("WEBCLIP_VIDEO_CODEC", "video_codec"),
    ("WEBCLIP_FFMPEG", "ffmpeg_path"),
    ("WEBCLIP_FFPROBE", "ffprobe_path"),
    ("WEBCLIP_LOG_LEVEL", "log_level"),
];

/// Settings resolved once at startup and read-only afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub platform: Platform,
    pub files_dir: Option<String>,
    pub temp_dir: Option<String>,
    pub max_file_size: u64,
    pub mime_types: Vec<String>,
    pub encode_policy: EncodePolicy,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub log_level: LogLevel,
}

impl Settings {
    /// Build typed settings from the merged configuration values
    pub fn from_config(config: &dyn ConfigPort) -> WebclipResult<Self> {
        let platform = match config.get_config("platform") {
            Some(value) => Platform::parse(&value)?,
            None => Platform::detect(),
        };

        let defaults = EncodePolicy::default();
        let encode_policy = EncodePolicy {
            scale_max_width: parse_value(config, "scale_max_width", defaults.scale_max_width)?,
            scale_max_height: parse_value(config, "scale_max_height", defaults.scale_max_height)?,
            preset: config.get_config_or_default("preset", &defaults.preset),
            fast_start: parse_value(config, "fast_start", defaults.fast_start)?,
            video_codec: config.get_config_or_default("video_codec", &defaults.video_codec),
        };
        encode_policy.validate()?;

        let mime_types = match config.get_config("mime_types") {
            Some(value) => value
                .split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            None => DEFAULT_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
        };

        Ok(Self {
            platform,
            files_dir: config.get_config("files_dir"),
            temp_dir: config.get_config("temp_dir"),
            max_file_size: parse_value(config, "max_file_size", DEFAULT_MAX_FILE_SIZE)?,
            mime_types,
            encode_policy,
            ffmpeg_path: config.get_config_or_default("ffmpeg_path", "ffmpeg"),
            ffprobe_path: config.get_config_or_default("ffprobe_path", "ffprobe"),
            log_level: LogLevel::parse(&config.get_config_or_default("log_level", "info"))?,
        })
    }

    /// Report the resolved settings; call once logging is installed
    pub fn log_resolved(&self) {
        info!("Configuration resolved for platform {}", self.platform);
        debug!(
            "Roots: files={}, temp={}",
            self.files_dir.as_deref().unwrap_or("<platform default>"),
            self.temp_dir.as_deref().unwrap_or("<platform default>")
        );
        debug!(
            "Chooser: max {} bytes, types {}",
            self.max_file_size,
            self.mime_types.join(",")
        );
        debug!(
            "Encode: {} {} scale {}x{}, faststart {}, engine {} / {}",
            self.encode_policy.video_codec,
            self.encode_policy.preset,
            self.encode_policy.scale_max_width,
            self.encode_policy.scale_max_height,
            self.encode_policy.fast_start,
            self.ffmpeg_path,
            self.ffprobe_path
        );
    }

    /// Settings handed to the home screen
    pub fn screen_settings(&self) -> ScreenSettings {
        ScreenSettings {
            max_file_size: self.max_file_size,
            mime_types: self.mime_types.clone(),
            encode_policy: self.encode_policy.clone(),
        }
    }
}

fn parse_value<T>(config: &dyn ConfigPort, key: &str, default: T) -> WebclipResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match config.get_config(key) {
        Some(value) => value.trim().parse().map_err(|e| WebclipError::ConfigError {
            message: format!("Invalid value for {}: '{}' ({})", key, value, e),
        }),
        None => Ok(default),
    }
}

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults
pub fn initialize_settings(config: &dyn ConfigPort, cli: &Cli) -> WebclipResult<Settings> {
    load_config_file(config, cli.config.as_deref())?;
    load_environment_variables(config, |key| std::env::var(key).ok());
    apply_cli_configuration_overrides(config, cli);

    Settings::from_config(config)
}

/// Load the explicit config file, or the default one when it exists
fn load_config_file(config: &dyn ConfigPort, explicit: Option<&str>) -> WebclipResult<()> {
    if let Some(path) = explicit {
        config.load_config(path)?;
        return Ok(());
    }

    let default_path = crate::adapters::TomlConfigAdapter::default_config_path();
    if default_path.is_file() {
        config.load_config(&default_path.to_string_lossy())?;
    }
    Ok(())
}

/// Apply `WEBCLIP_*` environment overrides
fn load_environment_variables<F>(config: &dyn ConfigPort, lookup: F) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let mut env_overrides = 0;
    for (env_var, config_key) in ENV_MAPPINGS {
        if let Some(value) = lookup(env_var) {
            config.set_config(config_key, &value);
            env_overrides += 1;
        }
    }
    env_overrides
}

/// Apply CLI argument overrides to configuration
fn apply_cli_configuration_overrides(config: &dyn ConfigPort, cli: &Cli) -> usize {
    let mut overrides: Vec<(&str, String)> = Vec::new();

    if let Some(platform) = &cli.platform {
        overrides.push(("platform", platform.clone()));
    }
    if let Some(level) = &cli.log_level {
        overrides.push(("log_level", level.clone()));
    }
    if let Some(dir) = &cli.files_dir {
        overrides.push(("files_dir", dir.clone()));
    }
    if let Some(dir) = &cli.temp_dir {
        overrides.push(("temp_dir", dir.clone()));
    }
    if let Some(path) = &cli.ffmpeg {
        overrides.push(("ffmpeg_path", path.clone()));
    }
    if let Some(path) = &cli.ffprobe {
        overrides.push(("ffprobe_path", path.clone()));
    }
    if let Commands::Probe(args) | Commands::Encode(args) = &cli.command {
        if let Some(max_size) = args.max_size {
            overrides.push(("max_file_size", max_size.to_string()));
        }
        if let Some(mime_types) = &args.mime_types {
            overrides.push(("mime_types", mime_types.join(",")));
        }
    }

    for (key, value) in &overrides {
        config.set_config(key, value);
    }
    overrides.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TomlConfigAdapter;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = TomlConfigAdapter::new();
        config.set_config("platform", "other");

        let settings = Settings::from_config(&config).unwrap();

        assert_eq!(settings.platform, Platform::Other);
        assert_eq!(settings.max_file_size, 100_000_000);
        assert_eq!(settings.mime_types, vec!["video/mp4", "video/quicktime"]);
        assert_eq!(settings.encode_policy, EncodePolicy::default());
        assert_eq!(settings.ffmpeg_path, "ffmpeg");
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.temp_dir, None);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let config = TomlConfigAdapter::new();
        config.set_config("max_file_size", "lots");
        assert!(matches!(
            Settings::from_config(&config),
            Err(WebclipError::ConfigError { .. })
        ));

        let config = TomlConfigAdapter::new();
        config.set_config("platform", "symbian");
        assert!(matches!(Settings::from_config(&config), Err(WebclipError::Domain(_))));

        let config = TomlConfigAdapter::new();
        config.set_config("scale_max_width", "0");
        assert!(Settings::from_config(&config).is_err());
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let config = TomlConfigAdapter::new();
        config
            .deserialize_config(
                "[webclip]\nplatform = \"ios\"\npreset = \"fast\"\nmax_file_size = 10\n",
            )
            .unwrap();

        let applied = load_environment_variables(&config, |key| match key {
            "WEBCLIP_PRESET" => Some("ultrafast".to_string()),
            "WEBCLIP_PLATFORM" => Some("other".to_string()),
            _ => None,
        });
        assert_eq!(applied, 2);

        let cli = Cli::parse_from([
            "webclip",
            "--platform",
            "android",
            "encode",
            "--file",
            "/tmp/a.mp4",
            "--max-size",
            "20",
            "--mime-types",
            "video/mp4,video/webm",
        ]);
        assert_eq!(apply_cli_configuration_overrides(&config, &cli), 3);

        let settings = Settings::from_config(&config).unwrap();
        assert_eq!(settings.platform, Platform::Android);
        assert_eq!(settings.encode_policy.preset, "ultrafast");
        assert_eq!(settings.max_file_size, 20);
        assert_eq!(settings.mime_types, vec!["video/mp4", "video/webm"]);
    }

    #[test]
    fn test_screen_settings() {
        let config = TomlConfigAdapter::new();
        config.set_config("fast_start", "false");
        let screen = Settings::from_config(&config).unwrap().screen_settings();
        assert!(!screen.encode_policy.fast_start);
        assert_eq!(screen.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }
}
