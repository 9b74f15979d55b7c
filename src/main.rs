//! Portfolio TUI - a personal portfolio page for the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use portfolio_tui::common::prelude::*;
use portfolio_tui::config;

/// Portfolio TUI - a personal portfolio page for the terminal
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "A personal portfolio page for the terminal", long_about = None)]
struct Args {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Animation tick rate in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    tick_rate: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = match args.config {
        Some(path) => config::load_settings_from(&path),
        None => config::load_settings(),
    };
    if let Some(tick_rate) = args.tick_rate {
        settings.ui.tick_rate_ms = tick_rate;
    }

    portfolio_tui::run(settings).await
}
