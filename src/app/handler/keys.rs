//! Key event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::message::Message;
use crate::app::state::{AppState, Page};

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Message::Quit),
        (KeyCode::Esc, _) => Some(Message::Quit),
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Page Navigation
        // ─────────────────────────────────────────────────────────
        (KeyCode::Char('h'), KeyModifiers::NONE) => Some(Message::Navigate(Page::Home)),
        (KeyCode::Char('p'), KeyModifiers::NONE) => Some(Message::Navigate(Page::Projects)),
        (KeyCode::Tab, KeyModifiers::NONE) => Some(Message::Navigate(state.page.toggled())),
        // Enter on the home page follows the "View Projects" affordance
        (KeyCode::Enter, KeyModifiers::NONE) if state.page == Page::Home => {
            Some(Message::Navigate(Page::Projects))
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        (KeyCode::Char('t'), KeyModifiers::NONE) => Some(Message::ToggleTheme),

        // ─────────────────────────────────────────────────────────
        // Project Cards (projects page only)
        // ─────────────────────────────────────────────────────────
        (KeyCode::Char('1'), KeyModifiers::NONE) if state.page == Page::Projects => {
            Some(Message::ToggleProject(0))
        }
        (KeyCode::Char('2'), KeyModifiers::NONE) if state.page == Page::Projects => {
            Some(Message::ToggleProject(1))
        }

        _ => None,
    }
}
