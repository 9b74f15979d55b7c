//! Color palettes for the light and dark themes
//!
//! The terminal analog of a pair of CSS custom-property palettes: every
//! widget pulls its colors from the palette selected by the root theme
//! value, so flipping the theme restyles the whole frame at once.

use ratatui::style::Color;

use crate::app::Theme;

/// A named set of colors shared by all widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub bg: Color,
    /// Body text
    pub text: Color,
    /// Secondary text (short descriptions)
    pub accent: Color,
    /// Card background
    pub card_bg: Color,
    /// Primary highlight (headings, titles)
    pub highlight: Color,
    /// Secondary highlight (links, subtitle, footer)
    pub highlight_alt: Color,
}

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(240, 244, 248),
    text: Color::Rgb(45, 55, 72),
    accent: Color::Rgb(74, 85, 104),
    card_bg: Color::Rgb(255, 255, 255),
    highlight: Color::Rgb(107, 70, 193),
    highlight_alt: Color::Rgb(56, 178, 172),
};

pub const DARK: Palette = Palette {
    bg: Color::Rgb(26, 32, 44),
    text: Color::Rgb(226, 232, 240),
    accent: Color::Rgb(113, 128, 150),
    card_bg: Color::Rgb(45, 55, 72),
    highlight: Color::Rgb(159, 122, 234),
    highlight_alt: Color::Rgb(79, 209, 197),
};

impl Palette {
    /// Palette for the given theme
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}
