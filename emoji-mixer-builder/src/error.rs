//! Typed error variants for the emoji-mixer-builder crate.
//!
//! Every variant is fatal to a build: the builder aborts and no artifact is
//! written. Incomplete source records are not errors; they are skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an artifact build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source file could not be read, or the artifact could not be written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source file is not valid JSON.
    #[error("Failed to parse emoji source: {0}")]
    Parse(#[source] serde_json::Error),

    /// The source parsed but is neither an array nor `{ "data": [...] }`.
    #[error("Emoji source has unexpected shape. Expected array or {{ data: [] }}, found {found}.")]
    UnexpectedShape {
        /// JSON type that was found at the top level.
        found: &'static str,
    },

    /// The artifact could not be serialized.
    #[error("Failed to serialize artifact: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}
