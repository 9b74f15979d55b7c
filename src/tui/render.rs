//! Main rendering logic (View in TEA pattern)

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::{AppState, Page};
use crate::tui::layout;
use crate::tui::theme::Palette;
use crate::tui::widgets::{FloatIcon, Footer, HomeView, NavBar, ProjectsView};

/// Render the complete UI from the current state.
///
/// Exactly one of the two pages is drawn; nav bar, footer and the floating
/// icon are present on both.
pub fn view(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme);
    let area = frame.area();

    // Paint the themed background before anything else
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(NavBar::new(state.theme), areas.header);

    match state.page {
        Page::Home => frame.render_widget(HomeView::new(state.theme), areas.content),
        Page::Projects => frame.render_widget(ProjectsView::new(state), areas.content),
    }

    frame.render_widget(Footer::new(state.theme), areas.footer);

    // Decorative icon sits on top of everything, on every page
    frame.render_widget(
        FloatIcon::new(state.theme, state.tick, state.settings.ui.tick_rate_ms),
        area,
    );
}
