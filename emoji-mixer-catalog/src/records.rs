//! Record and artifact types shared by the builder and the runtime.
//!
//! Field names on the wire follow the camelCase layout of the static JSON
//! artifacts (`emojiIndex.json`, `pairMixes.json`), which are also read by
//! the browser front end.

use crate::pair_key::PairKey;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use thiserror::Error;

/// Rank given to emoji without an explicit order so they sort last.
///
/// Equal to the largest integer a JavaScript number holds exactly, which
/// keeps the artifact readable by the browser front end.
pub const UNRANKED_ORDER: i64 = 9_007_199_254_740_991;

/// One entry of the emoji index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecord {
    /// The glyph itself
    pub emoji: String,
    /// Lowercase codepoint string of `emoji`
    pub codepoint: String,
    /// Display name (source `alt`, else the first keyword, else empty)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    /// Sort rank as given by the source (any JSON number);
    /// [`UNRANKED_ORDER`] when the source has none
    #[serde(default = "default_order")]
    pub order: Number,
    /// True if the source lists at least one combination for this emoji
    #[serde(default)]
    pub has_mix: bool,
}

pub fn default_category() -> String {
    "other".to_string()
}

pub fn default_order() -> Number {
    Number::from(UNRANKED_ORDER)
}

impl EmojiRecord {
    /// `order` as a float, for sorting.
    pub fn rank(&self) -> f64 {
        self.order.as_f64().unwrap_or(UNRANKED_ORDER as f64)
    }
}

/// One mashup image for an unordered pair of emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairMixRecord {
    pub key: PairKey,
    #[serde(rename = "leftEmoji", default, skip_serializing_if = "Option::is_none")]
    pub left_glyph: Option<String>,
    #[serde(rename = "rightEmoji", default, skip_serializing_if = "Option::is_none")]
    pub right_glyph: Option<String>,
    #[serde(rename = "leftEmojiCodepoint")]
    pub left_codepoint: String,
    #[serde(rename = "rightEmojiCodepoint")]
    pub right_codepoint: String,
    /// Mashup image; the source occasionally lists a combination without one
    #[serde(rename = "gStaticUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "alt", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Release date of the mashup, compared as a plain string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl PairMixRecord {
    /// Returns true if `self` should replace `existing` for the same key.
    ///
    /// Dates compare as strings. A present date beats an absent one and equal
    /// dates keep the existing record.
    pub fn is_newer_than(&self, existing: &PairMixRecord) -> bool {
        self.date > existing.date
    }
}

/// `emojiIndex.json` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiIndexArtifact {
    /// ISO 8601 generation timestamp
    pub generated_at: String,
    pub count: usize,
    pub emojis: Vec<EmojiRecord>,
}

/// `pairMixes.json` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairMixArtifact {
    /// ISO 8601 generation timestamp
    pub generated_at: String,
    /// Number of distinct pair keys
    pub count: usize,
    pub pairs: BTreeMap<PairKey, PairMixRecord>,
}

/// Failure to parse a static artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to parse {artifact}: {source}")]
    Parse {
        /// Artifact file name, for messages
        artifact: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl EmojiIndexArtifact {
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        serde_json::from_str(json).map_err(|source| ArtifactError::Parse {
            artifact: "emojiIndex.json",
            source,
        })
    }
}

impl PairMixArtifact {
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Self =
            serde_json::from_str(json).map_err(|source| ArtifactError::Parse {
                artifact: "pairMixes.json",
                source,
            })?;
        if artifact.count != artifact.pairs.len() {
            log::warn!(
                "pairMixes.json declares {} pairs but contains {}",
                artifact.count,
                artifact.pairs.len()
            );
        }
        Ok(artifact)
    }
}
