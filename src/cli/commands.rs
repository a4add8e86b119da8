//! Command implementations

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::TomlConfigAdapter;
use crate::app::container::{AppContainer, DefaultAppContainer, PickerInputs};
use crate::app::{HomeScreenInteractor, ScreenState};
use crate::cli::args::CommandArgs;
use crate::cli::{Cli, Commands};
use crate::config_initialization::{initialize_settings, Settings};
use crate::domain::model::MediaProbeResult;
use crate::domain::rules::EncodeRules;
use crate::utils::logging::{init_logging, LogFormat};
use crate::utils::Utils;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(anyhow::anyhow!(
                "Invalid output format: {}. Valid formats: text, json, yaml",
                format
            )),
        }
    }
}

/// Resolve configuration, start logging and run the requested command
pub async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.format)?;
    let config = TomlConfigAdapter::new();
    let settings = initialize_settings(&config, &cli).context("Failed to load configuration")?;

    let log_format = if cli.json_logs { LogFormat::Json } else { LogFormat::Pretty };
    init_logging(settings.log_level, log_format);
    info!("Starting WebClip");
    if let Some(path) = config.config_file_path() {
        info!("Configuration file: {}", path.display());
    }
    settings.log_resolved();

    let state = match &cli.command {
        Commands::Command(args) => return print_command(args, &settings),
        Commands::Probe(args) => {
            open_screen(&settings, PickerInputs::chooser(args.file.clone()))
                .await?
                .select_and_probe()
                .await?
        }
        Commands::Encode(args) => {
            open_screen(&settings, PickerInputs::chooser(args.file.clone()))
                .await?
                .select_and_encode()
                .await?
        }
        Commands::GalleryProbe(args) => {
            open_screen(&settings, PickerInputs::gallery(args.source.clone()))
                .await?
                .select_from_gallery_and_probe()
                .await?
        }
        Commands::GalleryEncode(args) => {
            open_screen(&settings, PickerInputs::gallery(args.source.clone()))
                .await?
                .select_from_gallery_and_encode()
                .await?
        }
    };

    println!("{}", render_state(&state, format)?);
    Ok(())
}

/// Wire the adapters and hand back the home screen
async fn open_screen(settings: &Settings, inputs: PickerInputs) -> Result<Arc<HomeScreenInteractor>> {
    let container = DefaultAppContainer::ready(settings, inputs).await?;
    info!("Scratch directory: {}", container.storage().roots().temp_dir);
    Ok(container.home_screen())
}

/// Print the encode command for explicit paths
fn print_command(args: &CommandArgs, settings: &Settings) -> Result<()> {
    let command = EncodeRules::build_encode_command(&args.input, &args.output, &settings.encode_policy)?;
    println!("{}", command);
    Ok(())
}

/// Render the screen state in the requested format
pub fn render_state(state: &ScreenState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(state).context("Failed to serialize result to JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(state).context("Failed to serialize result to YAML"),
        OutputFormat::Text => Ok(render_text(state)),
    }
}

fn render_text(state: &ScreenState) -> String {
    let mut output = String::new();

    if let Some(information) = &state.video_information {
        output.push_str(&render_probe(information));
    }
    if let Some(encoded) = &state.encoded_src {
        output.push_str(&format!("Encoded output: {}\n", encoded));
    }
    if output.is_empty() {
        output.push_str("No video selected\n");
    }

    output.trim_end().to_string()
}

fn render_probe(information: &MediaProbeResult) -> String {
    let mut output = String::new();

    output.push_str("Video Information:\n");
    output.push_str(&format!("  File: {}\n", information.path));
    output.push_str(&format!("  Container: {}\n", information.format));
    if let Some((width, height)) = information.dimensions() {
        output.push_str(&format!("  Resolution: {}x{}\n", width, height));
    }
    if let Some(seconds) = information.duration_seconds {
        match Duration::try_from_secs_f64(seconds) {
            Ok(duration) => output.push_str(&format!("  Duration: {}\n", Utils::format_duration(duration))),
            Err(_) => output.push_str(&format!("  Duration: {} s\n", seconds)),
        }
    }
    if let Some(size) = information.size_bytes {
        output.push_str(&format!("  File Size: {}\n", Utils::format_file_size(size)));
    }
    if let Some(bit_rate) = information.bit_rate {
        output.push_str(&format!("  Bit Rate: {} bps\n", bit_rate));
    }

    if !information.streams.is_empty() {
        output.push_str(&format!("  Streams ({}):\n", information.streams.len()));
        for stream in &information.streams {
            match (stream.width, stream.height) {
                (Some(width), Some(height)) => output.push_str(&format!(
                    "    #{}: {} {} {}x{}\n",
                    stream.index, stream.codec_type, stream.codec_name, width, height
                )),
                _ => output.push_str(&format!(
                    "    #{}: {} {}\n",
                    stream.index, stream.codec_type, stream.codec_name
                )),
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProbeStream;

    fn probed_state() -> ScreenState {
        ScreenState {
            video_information: Some(MediaProbeResult {
                path: "/tmp/clip.mov".to_string(),
                format: "mov,mp4,m4a,3gp,3g2,mj2".to_string(),
                duration_seconds: Some(12.5),
                size_bytes: Some(2048),
                bit_rate: None,
                streams: vec![ProbeStream {
                    index: 0,
                    codec_type: "video".to_string(),
                    codec_name: "h264".to_string(),
                    width: Some(640),
                    height: Some(360),
                }],
            }),
            encoded_src: None,
            loading: false,
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("yaml").unwrap(), OutputFormat::Yaml);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_render_text_probe() {
        let text = render_state(&probed_state(), OutputFormat::Text).unwrap();
        assert!(text.contains("File: /tmp/clip.mov"));
        assert!(text.contains("Resolution: 640x360"));
        assert!(text.contains("Duration: 00:12.500"));
        assert!(text.contains("File Size: 2.00 KB"));
        assert!(text.contains("#0: video h264 640x360"));
    }

    #[test]
    fn test_render_text_unrepresentable_duration() {
        for seconds in [f64::INFINITY, 1e20, -3.0] {
            let mut state = probed_state();
            if let Some(information) = state.video_information.as_mut() {
                information.duration_seconds = Some(seconds);
            }

            let text = render_state(&state, OutputFormat::Text).unwrap();
            assert!(text.contains(&format!("Duration: {} s", seconds)));
        }
    }

    #[test]
    fn test_render_text_empty() {
        let text = render_state(&ScreenState::default(), OutputFormat::Text).unwrap();
        assert_eq!(text, "No video selected");
    }

    #[test]
    fn test_render_json() {
        let state = ScreenState {
            encoded_src: Some("/scratch/1.mp4".to_string()),
            ..ScreenState::default()
        };
        let json = render_state(&state, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["encoded_src"], "/scratch/1.mp4");
        assert_eq!(value["loading"], false);
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render_state(&probed_state(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("codec_name: h264"));
    }
}
