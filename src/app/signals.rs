//! Delivers OS shutdown requests to the event loop

use tokio::sync::mpsc;

use super::message::Message;
use crate::common::prelude::*;

/// Forward the first termination signal as a quit message.
///
/// The page holds no state worth flushing, so a single notification is all
/// the loop needs; it restores the terminal on its way out like any other
/// quit.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_requested().await {
            Ok(()) => {
                info!("Termination signal, quitting");
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => warn!("Signal listener unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn shutdown_requested() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => {}
        _ = terminate.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn shutdown_requested() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
