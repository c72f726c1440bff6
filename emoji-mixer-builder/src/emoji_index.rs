//! Emoji index pass: source records → sorted [`EmojiRecord`] list.

use crate::source::RawEmoji;
use emoji_mixer_catalog::records::{
    EmojiIndexArtifact, EmojiRecord, default_category, default_order,
};
use serde_json::Value;

/// Convert one source element into an index record.
///
/// Returns `None` unless both the glyph and its codepoint are present and
/// non-empty.
pub fn emoji_record(raw: &RawEmoji) -> Option<EmojiRecord> {
    let emoji = raw.emoji.as_deref().filter(|s| !s.is_empty())?;
    let codepoint = raw.emoji_codepoint.as_deref().filter(|s| !s.is_empty())?;
    let keywords = raw.keyword_strings();

    Some(EmojiRecord {
        emoji: emoji.to_string(),
        codepoint: codepoint.to_lowercase(),
        name: raw
            .alt
            .clone()
            .or_else(|| keywords.first().cloned())
            .unwrap_or_default(),
        keywords,
        category: raw.category.clone().unwrap_or_else(default_category),
        subcategory: raw.subcategory.clone().unwrap_or_default(),
        order: raw.g_board_order.clone().unwrap_or_else(default_order),
        has_mix: raw.has_combinations(),
    })
}

/// Build the index records for a parsed source, sorted by `order`.
///
/// The sort is stable, so records with equal rank keep source order.
pub fn build_emoji_records(source: &[Value]) -> Vec<EmojiRecord> {
    let mut skipped = 0usize;
    let mut records: Vec<EmojiRecord> = source
        .iter()
        .filter_map(|item| {
            let record = RawEmoji::from_value(item).and_then(|raw| emoji_record(&raw));
            if record.is_none() {
                skipped += 1;
            }
            record
        })
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {} source records missing emoji or codepoint", skipped);
    }

    records.sort_by(|a, b| a.rank().total_cmp(&b.rank()));
    records
}

/// Wrap records into the `emojiIndex.json` envelope.
pub fn build_emoji_index(source: &[Value], generated_at: String) -> EmojiIndexArtifact {
    let emojis = build_emoji_records(source);
    EmojiIndexArtifact {
        generated_at,
        count: emojis.len(),
        emojis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grinning_example() {
        let source = vec![json!({
            "emoji": "😀",
            "emojiCodepoint": "1F600",
            "keywords": ["grinning"],
            "gBoardOrder": 5
        })];
        let records = build_emoji_records(&source);
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.codepoint, "1f600");
        assert_eq!(rec.name, "grinning");
        assert_eq!(rec.order.as_i64(), Some(5));
        assert_eq!(rec.category, "other");
        assert_eq!(rec.subcategory, "");
        assert!(!rec.has_mix);
    }

    #[test]
    fn test_missing_emoji_skipped() {
        let source = vec![
            json!({"emojiCodepoint": "1f600"}),
            json!({"emoji": "🔥"}),
            json!({"emoji": "", "emojiCodepoint": "1f525"}),
            Value::Null,
            json!({"emoji": "👻", "emojiCodepoint": "1f47b"}),
        ];
        let records = build_emoji_records(&source);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].emoji, "👻");
    }

    #[test]
    fn test_alt_preferred_over_keyword() {
        let raw = RawEmoji::from_value(&json!({
            "emoji": "🔥",
            "emojiCodepoint": "1f525",
            "alt": "fire",
            "keywords": ["flame", "hot"],
            "category": "travel",
            "subcategory": "sky",
            "combinations": [{}]
        }))
        .unwrap();
        let rec = emoji_record(&raw).unwrap();
        assert_eq!(rec.name, "fire");
        assert_eq!(rec.keywords, vec!["flame", "hot"]);
        assert_eq!(rec.category, "travel");
        assert_eq!(rec.subcategory, "sky");
        assert!(rec.has_mix);
    }

    #[test]
    fn test_stable_sort_unranked_last() {
        let source = vec![
            json!({"emoji": "a", "emojiCodepoint": "61"}),
            json!({"emoji": "b", "emojiCodepoint": "62", "gBoardOrder": 2}),
            json!({"emoji": "c", "emojiCodepoint": "63", "gBoardOrder": 1}),
            json!({"emoji": "d", "emojiCodepoint": "64", "gBoardOrder": 2}),
            json!({"emoji": "e", "emojiCodepoint": "65"}),
        ];
        let order: Vec<_> = build_emoji_records(&source)
            .into_iter()
            .map(|r| r.emoji)
            .collect();
        assert_eq!(order, vec!["c", "b", "d", "a", "e"]);
    }

    #[test]
    fn test_fractional_order_kept() {
        let source = vec![
            json!({"emoji": "a", "emojiCodepoint": "61", "gBoardOrder": 6}),
            json!({"emoji": "b", "emojiCodepoint": "62", "gBoardOrder": 5.5}),
            json!({"emoji": "c", "emojiCodepoint": "63", "gBoardOrder": 5}),
        ];
        let records = build_emoji_records(&source);
        let order: Vec<_> = records.iter().map(|r| r.emoji.as_str()).collect();
        assert_eq!(order, vec!["c", "b", "a"]);

        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(json[0]["order"], 5);
        assert_eq!(json[1]["order"], 5.5);
    }

    #[test]
    fn test_envelope_count() {
        let source = vec![json!({"emoji": "😀", "emojiCodepoint": "1f600"})];
        let artifact = build_emoji_index(&source, "2024-01-01T00:00:00.000Z".to_string());
        assert_eq!(artifact.count, 1);
        assert_eq!(artifact.generated_at, "2024-01-01T00:00:00.000Z");
    }
}
