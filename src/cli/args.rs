//! Command-line argument definitions

use clap::Args;

/// Arguments for the chooser commands
#[derive(Args, Debug)]
pub struct ChooseArgs {
    /// File to pick; omit to dismiss the chooser
    #[arg(short, long)]
    pub file: Option<String>,

    /// Size ceiling in bytes
    #[arg(long)]
    pub max_size: Option<u64>,

    /// Allowed MIME types (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub mime_types: Option<Vec<String>>,
}

/// Arguments for the gallery commands
#[derive(Args, Debug)]
pub struct GalleryArgs {
    /// Library item to pick; omit to dismiss the picker
    #[arg(short, long)]
    pub source: Option<String>,
}

/// Arguments for the command preview
#[derive(Args, Debug)]
pub struct CommandArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output MP4 path
    #[arg(short, long)]
    pub output: String,
}
