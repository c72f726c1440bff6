//! Codepoint encoding, pair keys and mashup lookup for emoji-mixer.
//!
//! This crate holds the pure core shared by the offline builder and the
//! runtime:
//!
//! - `codepoint`: glyph ⇄ lowercase hyphen-joined hex codepoint strings
//! - `pair_key`: order-independent keys for a pair of codepoint strings
//! - `records`: emoji and pair-mix records plus their JSON artifact envelopes
//! - `catalog`: the immutable pair catalog, lookup and partner index
//! - `emoji_index`: the pickable emoji list keyed by codepoint

pub mod catalog;
pub mod codepoint;
pub mod emoji_index;
pub mod pair_key;
pub mod records;

pub use catalog::{Catalog, DEFAULT_MIX_LABEL, MixView, PartnerIndex};
pub use codepoint::{CodepointError, decode, encode, is_codepoint_string, split_glyphs};
pub use emoji_index::EmojiIndex;
pub use pair_key::{PairKey, normalize};
pub use records::{
    ArtifactError, EmojiIndexArtifact, EmojiRecord, PairMixArtifact, PairMixRecord,
    UNRANKED_ORDER,
};
