//! In-memory session state for an emoji-mixer front end.
//!
//! Tracks the two selected glyphs, the recently viewed mixes and the user's
//! favorites. Nothing here is persisted; storage belongs to the front end.

use emoji_mixer_catalog::MixView;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The two selected glyphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    first: Option<String>,
    second: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with both glyphs set.
    pub fn with_pair(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: Some(first.into()),
            second: Some(second.into()),
        }
    }

    /// Pick a glyph: fills the first slot, then the second, then replaces the
    /// second.
    pub fn pick(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        if self.first.is_none() {
            self.first = Some(glyph);
        } else {
            self.second = Some(glyph);
        }
    }

    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }

    /// Exchange the two slots. Does nothing when both are empty.
    pub fn swap(&mut self) {
        if self.first.is_none() && self.second.is_none() {
            return;
        }
        std::mem::swap(&mut self.first, &mut self.second);
    }

    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }

    /// Both glyphs, if the selection is complete.
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.first.as_deref()?, self.second.as_deref()?))
    }
}

/// Compact record of a viewed or favorited mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixSummary {
    /// Normalized pair key of the mix
    pub id: String,
    pub emoji_a: String,
    pub emoji_b: String,
    pub label: String,
}

impl MixSummary {
    /// Summary of `mix` as selected by the user (not as stored in the record).
    pub fn from_mix(mix: &MixView, emoji_a: &str, emoji_b: &str) -> Self {
        Self {
            id: mix.id.clone(),
            emoji_a: emoji_a.to_string(),
            emoji_b: emoji_b.to_string(),
            label: mix.label.clone(),
        }
    }
}

/// Bounded list of summaries, newest first, unique by id.
#[derive(Debug, Clone)]
struct SummaryList {
    entries: VecDeque<MixSummary>,
    max_entries: usize,
}

impl SummaryList {
    fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    fn push_front(&mut self, summary: MixSummary) {
        self.entries.retain(|e| e.id != summary.id);
        self.entries.push_front(summary);
        self.truncate();
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    fn truncate(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_back();
        }
    }
}

/// Recently viewed mixes.
#[derive(Debug, Clone)]
pub struct MixHistory {
    list: SummaryList,
}

impl MixHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            list: SummaryList::new(max_entries),
        }
    }

    /// Record a viewed mix, moving an earlier entry with the same id to the front.
    pub fn record(&mut self, summary: MixSummary) {
        self.list.push_front(summary);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &VecDeque<MixSummary> {
        &self.list.entries
    }

    pub fn len(&self) -> usize {
        self.list.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.entries.is_empty()
    }
}

/// Favorite mixes.
#[derive(Debug, Clone)]
pub struct Favorites {
    list: SummaryList,
}

impl Favorites {
    pub fn new(max_entries: usize) -> Self {
        Self {
            list: SummaryList::new(max_entries),
        }
    }

    /// Add the mix if it is not a favorite yet, remove it otherwise.
    ///
    /// Returns true if the mix is a favorite afterwards.
    pub fn toggle(&mut self, summary: MixSummary) -> bool {
        if self.list.remove(&summary.id) {
            log::debug!("Removed favorite {}", summary.id);
            false
        } else {
            log::debug!("Added favorite {}", summary.id);
            self.list.push_front(summary);
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    /// Entries, most recently added first.
    pub fn entries(&self) -> &VecDeque<MixSummary> {
        &self.list.entries
    }

    pub fn len(&self) -> usize {
        self.list.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.entries.is_empty()
    }
}
