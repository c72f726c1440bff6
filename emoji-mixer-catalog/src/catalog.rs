//! Runtime catalog: pair lookup and the derived partner index.

use crate::codepoint::encode;
use crate::pair_key::PairKey;
use crate::records::{PairMixArtifact, PairMixRecord};
use std::collections::{BTreeSet, HashMap};

/// Label used when a mix record carries no `alt` text.
pub const DEFAULT_MIX_LABEL: &str = "Emoji mix";

/// Maps each codepoint string to the codepoints it has a recorded mix with.
///
/// Derived from a [`Catalog`] and rebuilt with it; never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartnerIndex {
    partners: HashMap<String, BTreeSet<String>>,
}

impl PartnerIndex {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a PairMixRecord>) -> Self {
        let mut partners: HashMap<String, BTreeSet<String>> = HashMap::new();
        for record in records {
            // The key holds both codepoints already normalized.
            let (a, b) = record.key.parts();
            partners.entry(a.to_string()).or_default().insert(b.to_string());
            partners.entry(b.to_string()).or_default().insert(a.to_string());
        }
        Self { partners }
    }

    /// Partners of a codepoint string, in ascending order.
    pub fn partners_of(&self, codepoint: &str) -> Option<&BTreeSet<String>> {
        self.partners.get(&codepoint.to_lowercase())
    }

    /// Number of codepoints with at least one partner.
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

/// Display-ready result of resolving a selected pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixView {
    /// Normalized pair key
    pub id: String,
    pub emoji_a: String,
    pub emoji_b: String,
    /// Absent when the source recorded the pair without an image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub label: String,
}

/// Immutable pair-mix catalog loaded from `pairMixes.json`.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    generated_at: Option<String>,
    pairs: HashMap<PairKey, PairMixRecord>,
    partners: PartnerIndex,
}

impl Catalog {
    /// An empty catalog; every lookup reports "not found".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_artifact(artifact: PairMixArtifact) -> Self {
        let pairs: HashMap<PairKey, PairMixRecord> = artifact.pairs.into_iter().collect();
        let partners = PartnerIndex::from_records(pairs.values());
        log::debug!(
            "Catalog built with {} pairs, {} partnered codepoints",
            pairs.len(),
            partners.len()
        );
        Self {
            generated_at: Some(artifact.generated_at),
            pairs,
            partners,
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = PairMixRecord>) -> Self {
        let pairs: HashMap<PairKey, PairMixRecord> = records
            .into_iter()
            .map(|record| (record.key.clone(), record))
            .collect();
        let partners = PartnerIndex::from_records(pairs.values());
        Self {
            generated_at: None,
            pairs,
            partners,
        }
    }

    pub fn generated_at(&self) -> Option<&str> {
        self.generated_at.as_deref()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn partners(&self) -> &PartnerIndex {
        &self.partners
    }

    /// Look up a record by its normalized key.
    pub fn get(&self, key: &PairKey) -> Option<&PairMixRecord> {
        self.pairs.get(key)
    }

    /// Look up the pair formed by two codepoint strings, in either order.
    pub fn get_by_codepoints(&self, a: &str, b: &str) -> Option<&PairMixRecord> {
        PairKey::new(a, b).and_then(|key| self.pairs.get(&key))
    }

    /// Look up the mix for two glyphs.
    ///
    /// Returns `None` when there is no mix for the pair, and also when either
    /// glyph is empty (no selection).
    pub fn lookup(&self, glyph_a: &str, glyph_b: &str) -> Option<&PairMixRecord> {
        let key = PairKey::from_glyphs(glyph_a, glyph_b)?;
        let found = self.pairs.get(&key);
        if found.is_none() {
            log::debug!("No mix for pair {key}");
        }
        found
    }

    /// Resolve two glyphs into a display-ready [`MixView`].
    pub fn resolve_mix(&self, glyph_a: &str, glyph_b: &str) -> Option<MixView> {
        let record = self.lookup(glyph_a, glyph_b)?;
        Some(MixView {
            id: record.key.to_string(),
            emoji_a: record
                .left_glyph
                .clone()
                .unwrap_or_else(|| glyph_a.to_string()),
            emoji_b: record
                .right_glyph
                .clone()
                .unwrap_or_else(|| glyph_b.to_string()),
            image_url: record.image_url.clone(),
            label: record
                .label
                .clone()
                .unwrap_or_else(|| DEFAULT_MIX_LABEL.to_string()),
        })
    }

    /// Codepoints that have a recorded mix with `glyph`.
    pub fn partners_of_glyph(&self, glyph: &str) -> Option<&BTreeSet<String>> {
        self.partners.partners_of(&encode(glyph))
    }

    pub fn records(&self) -> impl Iterator<Item = &PairMixRecord> {
        self.pairs.values()
    }
}
