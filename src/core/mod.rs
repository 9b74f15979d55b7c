//! Core domain types - the fixed portfolio content and animation math

pub mod animation;
pub mod portfolio;

pub use animation::{float_offset, FLOAT_AMPLITUDE, FLOAT_PERIOD_MS};
pub use portfolio::{profile, projects, Profile, Project};
