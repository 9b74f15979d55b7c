//! Portfolio TUI Library
//!
//! A terminal rendition of a personal portfolio page: a home view with a
//! biography, a projects view with expandable cards, a light/dark theme
//! toggle, and a decorative floating icon.

// Module declarations
pub mod app;
pub mod common;
pub mod config;
pub mod core;
pub mod tui;

// Re-export main entry point
pub use app::run;
