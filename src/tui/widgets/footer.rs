//! Footer widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::Theme;
use crate::core::portfolio;
use crate::tui::theme::Palette;

/// Bottom bar with the copyright notice
pub struct Footer {
    theme: Theme,
}

impl Footer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.theme);
        let notice = Style::default().fg(palette.highlight_alt);

        let mut lines = vec![Line::default()];
        lines.push(Line::from(Span::styled(
            portfolio::profile().copyright,
            notice,
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette.bg))
            .render(area, buf);
    }
}
