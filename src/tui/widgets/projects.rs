//! Projects page widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::AppState;
use crate::core::portfolio::{self, Project};
use crate::tui::theme::Palette;
use crate::tui::widgets::text::wrap_text;

/// Projects page: a heading and one expandable card per project
pub struct ProjectsView<'a> {
    state: &'a AppState,
}

impl<'a> ProjectsView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn card_lines(
        project: &Project,
        index: usize,
        expanded: bool,
        width: usize,
        palette: &Palette,
    ) -> Vec<Line<'static>> {
        let title = Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(palette.text);
        let button = Style::default()
            .fg(palette.highlight_alt)
            .add_modifier(Modifier::BOLD);
        let link = Style::default()
            .fg(palette.highlight_alt)
            .add_modifier(Modifier::UNDERLINED);

        let label = if expanded { "Hide Details" } else { "Show Details" };
        let marker = if expanded { "\u{25b4}" } else { "\u{25be}" };

        let mut lines = vec![Line::from(Span::styled(project.title, title))];
        for row in wrap_text(project.short_description, width) {
            lines.push(Line::from(Span::styled(row, body)));
        }
        lines.push(Line::from(Span::styled(
            format!("[{}] {} {}", index + 1, label, marker),
            button,
        )));
        if expanded {
            for row in wrap_text(project.full_description, width) {
                lines.push(Line::from(Span::styled(row, body)));
            }
        }
        lines.push(Line::from(Span::styled(project.link, link)));
        lines
    }
}

impl Widget for ProjectsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.state.theme);

        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(1),
        };
        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let heading = Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled("Projects", heading))).render(
            Rect {
                height: 1.min(inner.height),
                ..inner
            },
            buf,
        );

        // Cards stack below the heading, each sized to its wrapped content.
        let text_width = inner.width.saturating_sub(3) as usize;
        let mut y = inner.y + 2;
        for (index, project) in portfolio::projects().iter().enumerate() {
            let expanded = self.state.is_expanded(index);
            let lines = Self::card_lines(project, index, expanded, text_width, palette);
            let height = lines.len() as u16;
            let bottom = inner.y + inner.height;
            if y >= bottom {
                break;
            }
            let card = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: height.min(bottom - y),
            };
            Paragraph::new(lines)
                .style(Style::default().bg(palette.card_bg))
                .block(
                    Block::default()
                        .borders(Borders::LEFT)
                        .border_style(Style::default().fg(palette.highlight_alt)),
                )
                .render(card, buf);
            y += height + 1;
        }
    }
}
