//! WebClip CLI
//!
//! Pick a video (file chooser or media library), then probe it or convert it
//! to a web-friendly MP4 with ffmpeg.
//!
//! # Usage
//!
//! ```bash
//! webclip probe --file clip.mov
//! webclip encode --file clip.mov --max-size 100000000
//! webclip --platform android gallery-encode --source ~/Videos/VID_0001.mp4
//! webclip command --input in.mov --output out.mp4
//! ```

use anyhow::Result;
use clap::Parser;

use webclip::cli::{commands, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::run(cli).await
}
