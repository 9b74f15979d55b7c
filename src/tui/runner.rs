//! Main TUI runner - terminal lifecycle and event loop

use std::time::Duration;

use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use crate::app::{signals, update, AppState, Message};
use crate::common::prelude::*;
use crate::config::Settings;
use crate::tui::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Owns the terminal for its whole lifetime: raw mode and the alternate
/// screen are restored on both the success and error paths.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    let (tx, mut rx) = mpsc::channel::<Message>(32);
    signals::spawn_signal_handler(tx);

    let result = run_loop(&mut term, &mut state, &mut rx).await;

    ratatui::restore();
    result
}

/// Draw/poll loop: drain queued messages, draw one frame, block on input
/// for at most one tick.
async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    rx: &mut mpsc::Receiver<Message>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(state.settings.ui.tick_rate_ms.max(1));

    while !state.should_quit() {
        while let Ok(message) = rx.try_recv() {
            process_message(state, message);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("Draw failed: {}", e)))?;

        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message and any follow-up messages it produces to completion
fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        next = update(state, message).message;
    }
}
