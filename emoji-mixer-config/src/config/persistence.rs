//! Config persistence and path resolution.
//!
//! Covers:
//! - `load` / `load_from` (YAML file I/O; a missing file yields defaults)
//! - `save` / `save_to` (atomic write via temp file + rename)
//! - XDG-style path helpers (`config_dir`, `config_path`)

use super::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default path, or defaults if it does not exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(&contents)?
        };
        config.validate()?;

        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        log::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("emoji-mixer")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/emoji-mixer on every Unix, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("emoji-mixer")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }
}
