//! Navigation bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::Theme;
use crate::core::portfolio;
use crate::tui::theme::Palette;

/// Sun icon, shown while the dark palette is active
const SUN_ICON: &str = "\u{2600}";
/// Moon icon, shown while the light palette is active
const MOON_ICON: &str = "\u{263e}";

/// Top navigation bar with page shortcuts and the theme toggle
pub struct NavBar {
    theme: Theme,
}

impl NavBar {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Icon for the theme toggle. It shows the CURRENT theme's symbol,
    /// signaling what a toggle switches away from.
    pub fn theme_icon(&self) -> &'static str {
        match self.theme {
            Theme::Light => MOON_ICON,
            Theme::Dark => SUN_ICON,
        }
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.theme);

        let title = Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(palette.accent);
        let key = Style::default().fg(palette.highlight_alt);

        let content = Line::from(vec![
            Span::styled(format!(" {}", portfolio::profile().name), title),
            Span::raw("   "),
            Span::styled("[", dim),
            Span::styled("h", key),
            Span::styled("] Home  ", dim),
            Span::styled("[", dim),
            Span::styled("p", key),
            Span::styled("] Projects  ", dim),
            Span::styled("[", dim),
            Span::styled("t", key),
            Span::styled(format!("] {} Theme  ", self.theme_icon()), dim),
            Span::styled("[", dim),
            Span::styled("q", key),
            Span::styled("] Quit", dim),
        ]);

        Paragraph::new(content)
            .style(Style::default().bg(palette.bg).fg(palette.text))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.accent)),
            )
            .render(area, buf);
    }
}
