//! Home page widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::Theme;
use crate::core::portfolio;
use crate::tui::theme::Palette;
use crate::tui::widgets::text::wrap_text;

/// Landing page: name, subtitle, biography and the projects affordance
pub struct HomeView {
    theme: Theme,
}

impl HomeView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.theme);
        let profile = portfolio::profile();

        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(1),
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let name = Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD);
        let subtitle = Style::default().fg(palette.highlight_alt);
        let body = Style::default().fg(palette.text);
        let button = Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD);
        let link = Style::default()
            .fg(palette.highlight_alt)
            .add_modifier(Modifier::UNDERLINED);

        let mut lines = vec![
            Line::from(Span::styled(profile.name, name)),
            Line::from(Span::styled(profile.subtitle, subtitle)),
            Line::default(),
        ];
        for row in wrap_text(profile.biography, inner.width as usize) {
            lines.push(Line::from(Span::styled(row, body)));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("[Enter] View Projects", button)));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("GitHub: ", body),
            Span::styled(profile.github_link, link),
        ]));

        Paragraph::new(lines)
            .style(Style::default().bg(palette.bg))
            .render(inner, buf);
    }
}
