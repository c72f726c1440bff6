//! "Try this next" suggestions for a selected pair.
//!
//! Suggestions pair one of the selected glyphs with another of its recorded
//! partners: first partners of the first glyph, then partners of the second.

use emoji_mixer_catalog::{Catalog, EmojiIndex, PairKey, encode};
use serde::Serialize;

/// How many suggestions to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionLimits {
    /// Cap for suggestions built from the first glyph's partners
    pub primary: usize,
    /// Overall cap
    pub max: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self { primary: 3, max: 5 }
    }
}

impl SuggestionLimits {
    pub fn from_config(config: &emoji_mixer_config::Config) -> Self {
        Self {
            primary: config.primary_suggestions,
            max: config.max_suggestions,
        }
    }
}

/// A related pair the user could try.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixSuggestion {
    /// Pair key of the suggested mix
    pub id: String,
    pub emoji_a: String,
    pub emoji_b: String,
    pub label: String,
}

/// Which selected glyph a suggestion keeps.
#[derive(Clone, Copy)]
enum Anchor {
    First,
    Second,
}

/// Suggest related pairs for the selection `(glyph_a, glyph_b)`.
///
/// The currently selected pair is never suggested. Partners without an
/// emoji index entry are skipped.
pub fn suggest(
    glyph_a: &str,
    glyph_b: &str,
    catalog: &Catalog,
    emojis: &EmojiIndex,
    limits: SuggestionLimits,
) -> Vec<MixSuggestion> {
    if glyph_a.is_empty() || glyph_b.is_empty() {
        return Vec::new();
    }

    let code_a = encode(glyph_a);
    let code_b = encode(glyph_b);
    let mut results = Vec::new();

    collect(
        &mut results,
        Anchor::First,
        (glyph_a, code_a.as_str()),
        &code_b,
        catalog,
        emojis,
        limits.primary.min(limits.max),
    );
    collect(
        &mut results,
        Anchor::Second,
        (glyph_b, code_b.as_str()),
        &code_a,
        catalog,
        emojis,
        limits.max,
    );

    log::debug!(
        "{} suggestions for {}+{}",
        results.len(),
        code_a,
        code_b
    );
    results
}

/// Append suggestions that keep `anchor` until `results` holds `cap` entries.
fn collect(
    results: &mut Vec<MixSuggestion>,
    anchor: Anchor,
    (glyph, code): (&str, &str),
    exclude: &str,
    catalog: &Catalog,
    emojis: &EmojiIndex,
    cap: usize,
) {
    let Some(partners) = catalog.partners().partners_of(code) else {
        return;
    };

    for partner in partners {
        if results.len() >= cap {
            break;
        }
        if partner == exclude {
            continue;
        }
        let Some(key) = PairKey::new(code, partner) else {
            continue;
        };
        let (Some(pair), Some(meta)) = (catalog.get(&key), emojis.get(partner)) else {
            continue;
        };

        let label = pair.label.clone().unwrap_or_else(|| meta.name.clone());
        let (emoji_a, emoji_b) = match anchor {
            Anchor::First => (glyph.to_string(), meta.emoji.clone()),
            Anchor::Second => (meta.emoji.clone(), glyph.to_string()),
        };
        results.push(MixSuggestion {
            id: key.to_string(),
            emoji_a,
            emoji_b,
            label,
        });
    }
}
