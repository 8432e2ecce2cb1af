//! Configuration management for Playdeck
//!
//! This module handles loading and managing configuration from various
//! sources including a user config file and environment variables.

use crate::utils::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Player settings
    pub player: PlayerSettings,

    /// Source catalog settings
    pub catalog: CatalogSettings,

    /// General settings
    pub general: GeneralSettings,
}

/// Player settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Initial volume (0.0 - 1.0)
    pub default_volume: f64,
}

/// Source catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Path to a catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            default_volume: 1.0,
        }
    }
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the available sources
    ///
    /// Configuration is loaded in the following order (later sources
    /// override earlier):
    /// 1. Default values
    /// 2. User config file (~/.config/playdeck/config.toml on Linux)
    /// 3. Environment variables (PLAYDECK_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific TOML file, then apply
    /// environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge_from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration from a TOML file
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlayerError::Config(format!("Failed to read config file: {}", e)))?;

        *self = toml::from_str(&contents)
            .map_err(|e| PlayerError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(volume) = std::env::var("PLAYDECK_VOLUME") {
            self.player.default_volume = volume
                .parse()
                .map_err(|e| PlayerError::Config(format!("Invalid PLAYDECK_VOLUME: {}", e)))?;
        }

        if let Ok(path) = std::env::var("PLAYDECK_CATALOG") {
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Ok(level) = std::env::var("PLAYDECK_LOG_LEVEL") {
            self.general.log_level = level;
        }

        Ok(())
    }

    /// Validate the configuration values
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.player.default_volume) {
            return Err(PlayerError::Config(format!(
                "default_volume must be between 0.0 and 1.0, got {}",
                self.player.default_volume
            )));
        }

        match self.general.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(PlayerError::Config(format!(
                "Unknown log level: {}",
                other
            ))),
        }
    }

    /// Path of the user configuration file
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("playdeck");
            path.push("config.toml");
            path
        })
    }
}
