// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[lessons]` - Lesson directory override
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments; see [`crate::app::paths`].
//!
//! A missing file yields the defaults. An unreadable or unparseable file
//! also yields the defaults, but with a [`LoadWarning`] the application
//! surfaces through the notification store at startup.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Lesson catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonsConfig {
    /// Directory scanned for lesson files when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Persisted user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub lessons: LessonsConfig,
}

/// A config file that existed but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// The file that failed to load.
    pub path: PathBuf,
    /// Why it failed.
    pub detail: String,
}

/// Loads the configuration from the resolved config directory.
///
/// Never fails: a broken file is reported as a warning alongside the
/// defaults so startup can continue.
pub fn load(override_dir: Option<&Path>) -> (Config, Option<LoadWarning>) {
    let Some(path) = config_file_path(override_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(LoadWarning {
                path,
                detail: err.to_string(),
            }),
        ),
    }
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config, override_dir: Option<&Path>) -> Result<()> {
    if let Some(path) = config_file_path(override_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| Error::Config(err.to_string()))
}

/// Saves a configuration to an explicit file path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|err| Error::Config(err.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}

fn config_file_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    paths::config_dir(override_dir).map(|dir| dir.join(CONFIG_FILE))
}
