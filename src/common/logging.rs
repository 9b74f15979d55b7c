//! File-based logging setup
//!
//! The TUI owns stdout, so all tracing output goes to a log file under the
//! platform data directory (e.g. `~/.local/share/portfolio-tui/portfolio.log`).

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use super::error::{Error, Result};

const LOG_DIR: &str = "portfolio-tui";
const LOG_FILE: &str = "portfolio.log";

/// Directory where the log file is written
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
}

/// Initialize tracing with a non-blocking file writer.
///
/// The returned guard must be kept alive for the duration of the program,
/// otherwise buffered log lines are dropped on exit.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| Error::logging(format!("Failed to create log dir {:?}: {}", dir, e)))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_tui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
