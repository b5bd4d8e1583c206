//! Configuration for wamsort
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files; the default location is the platform config directory.
//!
//! Configuration is organized into sections:
//! - Dialect (the markers that delimit header, cuts and footer)
//! - Output (how reordered copies are named)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wamsort_parser::BlockDialect;

use crate::error::{SettingsError, SettingsResult};

/// Application directory under the platform config directory
const APP_DIR: &str = "wamsort";

/// Default config file name
const CONFIG_FILE: &str = "config.toml";

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Prepended to the input file name to name the reordered copy
    pub prefix: String,
    /// Extension of the programs listed in a folder
    pub extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            prefix: "t_".to_string(),
            extension: "gcode".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Section markers of the machine's programs
    pub dialect: BlockDialect,
    /// Output file settings
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/wamsort/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(default) if default.is_file() => Self::load_from_file(&default),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.dialect
            .validate()
            .map_err(|reason| SettingsError::InvalidSetting {
                key: "dialect".to_string(),
                reason,
            })?;

        // The copy must never land on the input file
        if self.output.prefix.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "output.prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.output.prefix.contains(['/', '\\']) {
            return Err(SettingsError::InvalidSetting {
                key: "output.prefix".to_string(),
                reason: "must not contain a path separator".to_string(),
            });
        }

        if self.output.extension.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "output.extension".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
