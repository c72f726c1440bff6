//! Shared integration test helpers for emoji-mixer.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when a file only uses
//! some of the helpers.

#![allow(dead_code)]

use emoji_mixer_builder::{BuildPaths, run_emoji_index, run_pair_mixes};
use emoji_mixer_config::Config;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Raw metadata with five emoji and five mixes.
///
/// 😀 1f600 mixes with 🔥, 👻 and 🌈; 🔥 1f525 also mixes with 👻 and ❤.
/// 🐱 has no mixes and is left out of the emoji index.
pub fn sample_source() -> serde_json::Value {
    let combo = |l: &str, r: &str, alt: Option<&str>, date: &str| {
        json!({
            "leftEmojiCodepoint": l,
            "rightEmojiCodepoint": r,
            "gStaticUrl": format!("https://example.test/{date}/{l}_{r}.png"),
            "alt": alt,
            "date": date,
        })
    };

    json!([
        {
            "emoji": "😀",
            "emojiCodepoint": "1f600",
            "alt": "grinning face",
            "category": "smileys",
            "gBoardOrder": 1,
            "combinations": [
                combo("1f600", "1f525", Some("Fire face"), "20230101"),
                combo("1f600", "1f47b", None, "20220101"),
                combo("1f600", "1f308", None, "20220101"),
            ]
        },
        {
            "emoji": "🔥",
            "emojiCodepoint": "1f525",
            "alt": "fire",
            "gBoardOrder": 2,
            "combinations": [
                combo("1f525", "1f600", Some("Old fire face"), "20200101"),
                combo("1f525", "1f47b", Some("Spooky fire"), "20220101"),
                combo("2764", "1f525", None, "20220101"),
            ]
        },
        {
            "emoji": "👻",
            "emojiCodepoint": "1f47b",
            "alt": "ghost",
            "gBoardOrder": 3,
            "combinations": [combo("1f47b", "1f600", None, "20220101")]
        },
        {
            "emoji": "🌈",
            "emojiCodepoint": "1f308",
            "alt": "rainbow",
            "gBoardOrder": 4,
            "combinations": [combo("1f308", "1f600", None, "20220101")]
        },
        {
            "emoji": "❤",
            "emojiCodepoint": "2764",
            "alt": "red heart",
            "gBoardOrder": 5,
            "combinations": [combo("2764", "1f525", None, "20220101")]
        },
        {
            "emoji": "🐱",
            "emojiCodepoint": "1f431",
            "alt": "cat face",
            "gBoardOrder": 6
        }
    ])
}

/// A temp workspace holding `emoji.json` and a `public/` output directory.
pub struct TestWorkspace {
    pub dir: TempDir,
    pub config: Config,
}

impl TestWorkspace {
    /// Write the sample source; nothing is built yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let source = dir.path().join("emoji.json");
        fs::write(&source, sample_source().to_string()).expect("Failed to write source");

        let config = Config::default()
            .with_source_path(source.to_string_lossy())
            .with_public_dir(dir.path().join("public").to_string_lossy());
        Self { dir, config }
    }

    /// Write the sample source and run both builders.
    pub fn built() -> Self {
        let workspace = Self::new();
        let paths = workspace.build_paths();
        run_emoji_index(&paths).expect("emoji index build failed");
        run_pair_mixes(&paths).expect("pair mix build failed");
        workspace
    }

    pub fn build_paths(&self) -> BuildPaths {
        BuildPaths::new(self.config.resolved_source_path(), self.config.resolved_public_dir())
    }

    pub fn pair_mixes_path(&self) -> PathBuf {
        self.config.pair_mixes_path()
    }

    pub fn emoji_index_path(&self) -> PathBuf {
        self.config.emoji_index_path()
    }
}
