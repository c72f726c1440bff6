//! Order-independent pair keys.
//!
//! A pair key joins two lowercased codepoint strings with `+` after sorting
//! them, so `1f600` + `1f525` and `1f525` + `1f600` both become
//! `1f525+1f600`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the two codepoint strings of a pair key.
pub const PAIR_SEPARATOR: char = '+';

/// Normalized key for an unordered pair of codepoint strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    /// Build the key for two codepoint strings.
    ///
    /// Returns `None` if either side is empty; an empty side means "no
    /// selection" and must never reach a lookup.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        let a = a.trim();
        let b = b.trim();
        if a.is_empty() || b.is_empty() {
            return None;
        }

        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Some(Self(format!("{left}{PAIR_SEPARATOR}{right}")))
    }

    /// Build the key for two glyphs by encoding both first.
    pub fn from_glyphs(a: &str, b: &str) -> Option<Self> {
        Self::new(&crate::codepoint::encode(a), &crate::codepoint::encode(b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two codepoint strings, smaller first.
    pub fn parts(&self) -> (&str, &str) {
        self.0
            .split_once(PAIR_SEPARATOR)
            .unwrap_or((self.0.as_str(), ""))
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PairKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize two codepoint strings into the string form of their pair key.
pub fn normalize(a: &str, b: &str) -> Option<String> {
    PairKey::new(a, b).map(|key| key.0)
}
