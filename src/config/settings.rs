//! Settings loader for config.toml
//!
//! Loading is lenient: a missing or unparsable file falls back to defaults
//! with a log line rather than failing startup.

use std::path::{Path, PathBuf};

use super::types::Settings;
use crate::common::prelude::*;

const CONFIG_DIR: &str = "portfolio-tui";
const CONFIG_FILENAME: &str = "config.toml";

/// Default config path under the platform config directory
/// (e.g. `~/.config/portfolio-tui/config.toml`)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CONFIG_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from the default location
pub fn load_settings() -> Settings {
    load_settings_from(&default_config_path())
}

/// Load settings from an explicit path.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults_when_missing() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("config.toml"));

        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert!(settings.ui.animation);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntick_rate_ms = 100\nanimation = false\n").unwrap();

        let settings = load_settings_from(&path);

        assert_eq!(settings.ui.tick_rate_ms, 100);
        assert!(!settings.ui.animation);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings_from(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_default_config_path_filename() {
        assert!(default_config_path().ends_with("portfolio-tui/config.toml"));
    }
}
