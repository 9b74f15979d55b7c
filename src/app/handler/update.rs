//! Main update function - handles state transitions (TEA pattern)

use crate::app::message::Message;
use crate::app::state::AppState;
use crate::common::prelude::*;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
///
/// Every operation is total: there is no failure path, and each message runs
/// to completion before the next is processed.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.settings.ui.animation {
                state.advance_tick();
            }
            UpdateResult::none()
        }

        Message::Navigate(target) => {
            debug!("Navigate to {:?}", target);
            state.navigate(target);
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            state.toggle_theme();
            debug!("Theme switched to {}", state.theme.as_attr());
            UpdateResult::none()
        }

        Message::ToggleProject(index) => {
            state.toggle_project(index);
            debug!("Project {} expanded={}", index, state.is_expanded(index));
            UpdateResult::none()
        }
    }
}
