// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "first-app")]
#[command(about = "Fly-camera demo with frame statistics", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable the on-screen stats overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Start with the mouse cursor free instead of captured
    #[arg(long = "no-capture", default_value = "false")]
    pub no_capture: bool,

    /// Base movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Mouse look sensitivity in degrees per pixel
    #[arg(long)]
    pub sensitivity: Option<f32>,
}
