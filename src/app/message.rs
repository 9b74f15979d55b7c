//! Message types for the application (TEA pattern)

use crossterm::event::KeyEvent;

use super::state::Page;

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event for the float animation
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Actions
    // ─────────────────────────────────────────────────────────
    /// Switch to the given page
    Navigate(Page),

    /// Flip between light and dark palette
    ToggleTheme,

    /// Flip the expansion flag for a project card
    ToggleProject(usize),
}
