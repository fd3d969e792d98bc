// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[editor]` - Editor conveniences (last image directory)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_CARD_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "IcedCard";
const CONFIG_DIR_ENV: &str = "ICED_CARD_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    pub theme_mode: ThemeMode,
}

/// Editor conveniences persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct EditorConfig {
    /// Directory the image dialog opens in, updated after each upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_image_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub editor: EditorConfig,
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when the file is absent
/// or unreadable. A broken file is never fatal; the user just loses their
/// saved preferences for this session.
pub fn load() -> Config {
    let Some(path) = default_config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring unreadable config {}: {}", path.display(), err);
            Config::default()
        }
    }
}

/// Saves the configuration to the default location. A missing config
/// directory on the platform is a silent no-op.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
