//! Configuration loading and types

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::{Settings, UiSettings};
