//! CLI module for WebClip
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// WebClip
///
/// Pick a video and convert it to a web-friendly MP4 with ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "webclip")]
#[command(about = "WebClip - pick a video, get a web-friendly MP4")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Platform naming rules (android, ios, other); detected when omitted
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Configuration file
    #[arg(long, global = true, env = "WEBCLIP_CONFIG")]
    pub config: Option<String>,

    /// Logging level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Persistent files directory
    #[arg(long, global = true)]
    pub files_dir: Option<String>,

    /// Temp/scratch directory
    #[arg(long, global = true)]
    pub temp_dir: Option<String>,

    /// ffmpeg executable
    #[arg(long, global = true)]
    pub ffmpeg: Option<String>,

    /// ffprobe executable
    #[arg(long, global = true)]
    pub ffprobe: Option<String>,

    /// Output format for results (text, json, yaml)
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose a file and probe it
    Probe(args::ChooseArgs),
    /// Choose a file and encode it to MP4
    Encode(args::ChooseArgs),
    /// Pick a video from the library and probe it
    GalleryProbe(args::GalleryArgs),
    /// Pick a video from the library and encode it to MP4
    GalleryEncode(args::GalleryArgs),
    /// Print the encode command for a pair of paths
    Command(args::CommandArgs),
}
