//! Default values referenced by `#[serde(default = "...")]` attributes.

// ── Paths ──────────────────────────────────────────────────────────────────

pub fn source_path() -> String {
    "emoji.json".to_string()
}

pub fn public_dir() -> String {
    "public".to_string()
}

pub fn emoji_index_file() -> String {
    "emojiIndex.json".to_string()
}

pub fn pair_mixes_file() -> String {
    "pairMixes.json".to_string()
}

// ── Catalog loading ────────────────────────────────────────────────────────

pub fn catalog_load_retries() -> u32 {
    2
}

// ── Suggestions ────────────────────────────────────────────────────────────

pub fn primary_suggestions() -> usize {
    3
}

pub fn max_suggestions() -> usize {
    5
}

// ── Session ────────────────────────────────────────────────────────────────

pub fn history_limit() -> usize {
    20
}

pub fn favorites_limit() -> usize {
    30
}
