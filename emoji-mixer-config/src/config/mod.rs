//! The emoji-mixer `Config` struct, path resolution and validation.

mod persistence;

use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration shared by the CLI and the catalog runtime.
///
/// Every field has a serde default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Raw emoji metadata read by the builders
    #[serde(default = "crate::defaults::source_path")]
    pub source_path: String,

    /// Directory holding the built artifacts
    #[serde(default = "crate::defaults::public_dir")]
    pub public_dir: String,

    /// File name of the emoji index artifact inside `public_dir`
    #[serde(default = "crate::defaults::emoji_index_file")]
    pub emoji_index_file: String,

    /// File name of the pair-mix artifact inside `public_dir`
    #[serde(default = "crate::defaults::pair_mixes_file")]
    pub pair_mixes_file: String,

    /// Extra attempts after a failed catalog load
    #[serde(default = "crate::defaults::catalog_load_retries")]
    pub catalog_load_retries: u32,

    /// Suggestions drawn from the first emoji's partners
    #[serde(default = "crate::defaults::primary_suggestions")]
    pub primary_suggestions: usize,

    /// Total suggestion cap, including those from the second emoji's partners
    #[serde(default = "crate::defaults::max_suggestions")]
    pub max_suggestions: usize,

    /// Recently viewed mixes kept in a session
    #[serde(default = "crate::defaults::history_limit")]
    pub history_limit: usize,

    /// Favorite mixes kept in a session
    #[serde(default = "crate::defaults::favorites_limit")]
    pub favorites_limit: usize,

    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: crate::defaults::source_path(),
            public_dir: crate::defaults::public_dir(),
            emoji_index_file: crate::defaults::emoji_index_file(),
            pair_mixes_file: crate::defaults::pair_mixes_file(),
            catalog_load_retries: crate::defaults::catalog_load_retries(),
            primary_suggestions: crate::defaults::primary_suggestions(),
            max_suggestions: crate::defaults::max_suggestions(),
            history_limit: crate::defaults::history_limit(),
            favorites_limit: crate::defaults::favorites_limit(),
            log_level: LogLevel::default(),
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the artifact directory
    pub fn with_public_dir(mut self, dir: impl Into<String>) -> Self {
        self.public_dir = dir.into();
        self
    }

    /// Override the raw source path
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Raw source path with `~/` expanded
    pub fn resolved_source_path(&self) -> PathBuf {
        expand_home(&self.source_path)
    }

    /// Artifact directory with `~/` expanded
    pub fn resolved_public_dir(&self) -> PathBuf {
        expand_home(&self.public_dir)
    }

    pub fn emoji_index_path(&self) -> PathBuf {
        self.resolved_public_dir().join(&self.emoji_index_file)
    }

    pub fn pair_mixes_path(&self) -> PathBuf {
        self.resolved_public_dir().join(&self.pair_mixes_file)
    }

    /// Check field values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("source_path", &self.source_path),
            ("public_dir", &self.public_dir),
            ("emoji_index_file", &self.emoji_index_file),
            ("pair_mixes_file", &self.pair_mixes_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }

        if self.emoji_index_file == self.pair_mixes_file {
            return Err(ConfigError::Validation(format!(
                "emoji_index_file and pair_mixes_file are both '{}'",
                self.emoji_index_file
            )));
        }

        if self.max_suggestions < self.primary_suggestions {
            return Err(ConfigError::Validation(format!(
                "max_suggestions ({}) is less than primary_suggestions ({})",
                self.max_suggestions, self.primary_suggestions
            )));
        }

        if self.history_limit == 0 {
            return Err(ConfigError::Validation(
                "history_limit must be at least 1".to_string(),
            ));
        }

        if self.favorites_limit == 0 {
            return Err(ConfigError::Validation(
                "favorites_limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
