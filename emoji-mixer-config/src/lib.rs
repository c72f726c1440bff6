//! Configuration system for emoji-mixer.
//!
//! Provides the YAML-backed [`Config`] used by the CLI: artifact locations,
//! catalog load retries, suggestion and session limits, and the log level.

pub mod config;
pub mod defaults;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::LogLevel;
