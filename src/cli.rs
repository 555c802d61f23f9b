// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::settings::DEFAULT_SURFACE_SELECTOR;

#[derive(Parser, Debug, Clone)]
#[command(name = "pulse-triangle")]
#[command(about = "Vertex-colored triangle with pulsing transparency", long_about = None)]
pub struct Cli {
    /// Selector of the drawing surface (used as the window title)
    #[arg(long = "title", default_value = DEFAULT_SURFACE_SELECTOR)]
    pub title: String,

    /// Suppress the startup banner
    #[arg(long = "quiet", default_value = "false")]
    pub quiet: bool,

    /// Log filter in env_logger syntax, overrides RUST_LOG
    #[arg(long = "log")]
    pub log: Option<String>,
}
