// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every tunable that affects gesture or animation behavior lives here as an
//! explicit setting resolved at startup; there are no process-wide toggles.
//!
//! # Examples
//!
//! ```no_run
//! use iced_swipe::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSwipe";

/// Photo feed queried when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/photos?albumId=1";

/// Fraction of the window width a horizontal drag must exceed to swipe a card away.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 0.25;
pub const MIN_SWIPE_THRESHOLD: f32 = 0.05;
pub const MAX_SWIPE_THRESHOLD: f32 = 0.9;

/// Duration of the fly-out animation after a committed swipe.
pub const DEFAULT_FLING_DURATION_MS: u64 = 500;

/// Vertical offset applied per card below the top of the stack.
pub const DEFAULT_STACK_OFFSET: f32 = 10.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeMode>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub swipe_threshold: Option<f32>,
    #[serde(default)]
    pub fling_duration_ms: Option<u64>,
    #[serde(default)]
    pub stack_offset: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme: Some(ThemeMode::System),
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
            fling_duration_ms: Some(DEFAULT_FLING_DURATION_MS),
            stack_offset: Some(DEFAULT_STACK_OFFSET),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
