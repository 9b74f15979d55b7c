//! Application layer - state management and orchestration

pub mod handler;
pub mod message;
pub mod signals;
pub mod state;

pub use handler::{update, UpdateResult};
pub use message::Message;
pub use state::{AppState, Page, Theme};

use crate::common::prelude::*;
use crate::config::Settings;
use crate::tui;

/// Main application entry point
///
/// Installs error handling and logging, then runs the TUI with the given
/// settings until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logging goes to a file, since the TUI owns stdout. The guard must
    // outlive the event loop.
    let _log_guard = crate::common::logging::init()?;

    info!("Portfolio TUI starting");

    let result = tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Portfolio TUI exiting");
    result
}
