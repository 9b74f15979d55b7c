//! Terminal UI layer
//!
//! Rendering follows the TEA split: `render::view` is a pure function of the
//! state, `runner` owns the terminal and the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use render::view;
pub use runner::run;
