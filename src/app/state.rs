//! Application state (Model in TEA pattern)

use std::collections::HashMap;

use crate::config::Settings;

/// Which of the two sections is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Projects,
}

impl Page {
    /// The other page (used by Tab navigation)
    pub fn toggled(self) -> Self {
        match self {
            Page::Home => Page::Projects,
            Page::Projects => Page::Home,
        }
    }
}

/// Active color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Attribute value for the root display node, mirroring `data-theme`
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Currently rendered page
    pub page: Page,

    /// Active theme; selects the palette for every widget
    pub theme: Theme,

    /// Per-project expansion map. Absent keys read as collapsed; access goes
    /// through [`AppState::is_expanded`] so the default is explicit.
    expanded: HashMap<usize, bool>,

    /// Animation tick counter, advanced once per event-poll timeout
    pub tick: u64,

    /// Loaded settings
    pub settings: Settings,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            page: Page::Home,
            theme: Theme::Light,
            expanded: HashMap::new(),
            tick: 0,
            settings,
            quitting: false,
        }
    }

    /// Switch to the given page. Total over both variants.
    pub fn navigate(&mut self, target: Page) {
        self.page = target;
    }

    /// Flip between light and dark. Two calls restore the original theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Flip the expansion flag for a project index, treating a missing entry
    /// as collapsed (first toggle expands).
    ///
    /// The index is NOT validated against the project catalog: out-of-range
    /// indices are accepted and stored, with no visible effect on rendering.
    pub fn toggle_project(&mut self, index: usize) {
        let entry = self.expanded.entry(index).or_insert(false);
        *entry = !*entry;
    }

    /// Expansion state for a project index, defaulting to collapsed
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(&index).copied().unwrap_or(false)
    }

    /// Advance the animation tick counter
    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
