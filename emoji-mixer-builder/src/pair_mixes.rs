//! Pair-mix pass: every combination in the source → one record per pair key.
//!
//! When several combinations share a key, the one with the greatest `date`
//! string is kept (see [`PairMixRecord::is_newer_than`]).

use crate::source::{RawCombination, RawEmoji, RawPartner};
use emoji_mixer_catalog::{PairKey, PairMixArtifact, PairMixRecord};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Convert one combination into a pair record.
///
/// Returns `None` if either partner codepoint is missing or blank. A
/// combination without an image URL is still kept so that it takes part in
/// the newest-date choice for its pair.
pub fn pair_record(combo: RawCombination) -> Option<PairMixRecord> {
    let left = combo.left_codepoint()?.trim().to_lowercase();
    let right = combo.right_codepoint()?.trim().to_lowercase();
    let key = PairKey::new(&left, &right)?;

    let image_url = combo.g_static_url.filter(|url| !url.is_empty());
    if image_url.is_none() {
        log::debug!("Combination {key} has no gStaticUrl");
    }

    Some(PairMixRecord {
        key,
        left_glyph: combo
            .left_emoji
            .as_ref()
            .and_then(RawPartner::glyph)
            .map(str::to_string),
        right_glyph: combo
            .right_emoji
            .as_ref()
            .and_then(RawPartner::glyph)
            .map(str::to_string),
        left_codepoint: left,
        right_codepoint: right,
        image_url,
        label: combo.alt,
        date: combo.date,
    })
}

/// Keep `record` in `pairs` unless an existing record for its key is at
/// least as new.
fn keep_newest(
    mut pairs: BTreeMap<PairKey, PairMixRecord>,
    record: PairMixRecord,
) -> BTreeMap<PairKey, PairMixRecord> {
    match pairs.entry(record.key.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(record);
        }
        Entry::Occupied(mut slot) => {
            if record.is_newer_than(slot.get()) {
                slot.insert(record);
            }
        }
    }
    pairs
}

/// Fold every combination of every source element into the pair map.
pub fn build_pair_records(source: &[Value]) -> BTreeMap<PairKey, PairMixRecord> {
    source
        .iter()
        .filter_map(RawEmoji::from_value)
        .flat_map(|raw| raw.combination_records().collect::<Vec<_>>())
        .filter_map(pair_record)
        .fold(BTreeMap::new(), keep_newest)
}

/// Wrap the pair map into the `pairMixes.json` envelope.
pub fn build_pair_mixes(source: &[Value], generated_at: String) -> PairMixArtifact {
    let pairs = build_pair_records(source);
    PairMixArtifact {
        generated_at,
        count: pairs.len(),
        pairs,
    }
}
