//! Runtime view over `emojiIndex.json`.

use crate::records::{EmojiIndexArtifact, EmojiRecord};
use std::collections::HashMap;

/// The pickable emoji, in index order, with a by-codepoint map.
///
/// Only records with at least one mix are kept so the picker never offers
/// an emoji that cannot be combined.
#[derive(Debug, Default, Clone)]
pub struct EmojiIndex {
    emojis: Vec<EmojiRecord>,
    by_codepoint: HashMap<String, usize>,
}

impl EmojiIndex {
    pub fn from_artifact(artifact: EmojiIndexArtifact) -> Self {
        Self::from_records(artifact.emojis)
    }

    pub fn from_records(records: impl IntoIterator<Item = EmojiRecord>) -> Self {
        let emojis: Vec<EmojiRecord> = records.into_iter().filter(|r| r.has_mix).collect();
        let by_codepoint = emojis
            .iter()
            .enumerate()
            .map(|(i, r)| (r.codepoint.to_lowercase(), i))
            .collect();
        Self {
            emojis,
            by_codepoint,
        }
    }

    pub fn get(&self, codepoint: &str) -> Option<&EmojiRecord> {
        self.by_codepoint
            .get(&codepoint.to_lowercase())
            .map(|&i| &self.emojis[i])
    }

    pub fn emojis(&self) -> &[EmojiRecord] {
        &self.emojis
    }

    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}
