use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application configuration loaded from ~/.config/offgrid/config.toml.
///
/// Everything here is optional; the tool runs with no config file at all.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Steam root override for non-standard installs (extra drives,
    /// flatpak Steam). Skips candidate discovery entirely.
    pub steam_root: Option<PathBuf>,

    /// Default output format ("rich" or "json").
    pub format: Option<String>,
}

/// Get the config file path.
pub fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("offgrid")
            .join("config.toml")
    } else if let Ok(appdata) = std::env::var("APPDATA") {
        PathBuf::from(appdata).join("offgrid").join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

/// Load the application config from the default path.
pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

/// Load the application config from an explicit path.
///
/// A missing, unreadable, or unparseable file degrades to defaults; config
/// can never fail a run.
pub fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Failed to parse config at {}: {e}", path.display());
            AppConfig::default()
        }),
        Err(e) => {
            log::warn!("Failed to read config at {}: {e}", path.display());
            AppConfig::default()
        }
    }
}
