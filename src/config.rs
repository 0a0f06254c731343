// SPDX-License-Identifier: MPL-2.0
//! Demo application preferences, persisted to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use snacky::app::ThemeMode;
//! use snacky::config::{self, Config};
//!
//! // Load existing preferences
//! let mut config = config::load().unwrap_or_default();
//!
//! // Change a setting and persist it
//! config.theme = Some(ThemeMode::Dark);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::app::ThemeMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Snacky";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Option<ThemeMode>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the preferences from the platform config dir. A missing file is not
/// an error; it yields the defaults.
pub fn load() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Saves the preferences to the platform config dir.
pub fn save(config: &Config) -> Result<()> {
    let path = default_config_path()
        .ok_or_else(|| Error::Config("no platform config directory".to_string()))?;
    save_to_path(config, &path)
}

/// Loads the preferences from a specific path (e.g. for testing).
pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path).map_err(|error| Error::Io(error.to_string()))?;
    toml::from_str(&raw).map_err(|error| Error::Config(error.to_string()))
}

/// Saves the preferences to a specific path (e.g. for testing).
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| Error::Io(error.to_string()))?;
    }
    let raw = toml::to_string(config).map_err(|error| Error::Config(error.to_string()))?;
    fs::write(path, raw).map_err(|error| Error::Io(error.to_string()))
}
