//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Nav bar (1 for content + 1 for border)
        Constraint::Min(5),    // Page content
        Constraint::Length(2), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_full_area() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);

        assert_eq!(areas.header.height, 2);
        assert_eq!(areas.footer.height, 2);
        assert_eq!(
            areas.header.height + areas.content.height + areas.footer.height,
            area.height
        );
    }

    #[test]
    fn test_content_gets_remaining_rows() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.content.height, 20);
    }
}
