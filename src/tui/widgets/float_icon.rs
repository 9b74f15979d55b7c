//! Decorative floating icon

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::app::Theme;
use crate::core::animation::float_offset;
use crate::tui::theme::Palette;

const ICON: &str = "\u{26a1}";

/// Single-cell decorative glyph near the bottom-right corner. Its vertical
/// position bobs with the tick counter; it never reacts to input.
pub struct FloatIcon {
    theme: Theme,
    tick: u64,
    tick_rate_ms: u64,
}

impl FloatIcon {
    pub fn new(theme: Theme, tick: u64, tick_rate_ms: u64) -> Self {
        Self {
            theme,
            tick,
            tick_rate_ms,
        }
    }
}

impl Widget for FloatIcon {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }
        let palette = Palette::for_theme(self.theme);

        let offset = float_offset(self.tick, self.tick_rate_ms);
        let x = area.right().saturating_sub(3);
        let base_y = area.bottom().saturating_sub(2);
        let y = base_y.saturating_sub(offset).max(area.top());

        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(ICON);
            cell.set_style(Style::default().fg(palette.highlight));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::{FLOAT_AMPLITUDE, FLOAT_PERIOD_MS};
    use crate::tui::test_utils::TestTerminal;

    fn icon_position(term: &TestTerminal) -> Option<(u16, u16)> {
        let area = term.area();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if term.cell_at(x, y) == Some(ICON) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    #[test]
    fn test_rests_near_bottom_right_at_cycle_start() {
        let mut term = TestTerminal::new();
        term.render_widget(FloatIcon::new(Theme::Light, 0, 50), term.area());

        let area = term.area();
        assert_eq!(
            icon_position(&term),
            Some((area.right() - 3, area.bottom() - 2))
        );
    }

    #[test]
    fn test_rises_at_mid_cycle() {
        let half_period_ticks = FLOAT_PERIOD_MS / 2 / 50;
        let mut term = TestTerminal::new();
        term.render_widget(
            FloatIcon::new(Theme::Dark, half_period_ticks, 50),
            term.area(),
        );

        let area = term.area();
        let (_, y) = icon_position(&term).unwrap();
        assert_eq!(y, area.bottom() - 2 - FLOAT_AMPLITUDE);
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let mut term = TestTerminal::new();
        term.render_widget(FloatIcon::new(Theme::Light, 0, 50), Rect::new(0, 0, 3, 3));
        assert!(icon_position(&term).is_none());
    }
}
