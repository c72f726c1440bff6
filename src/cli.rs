//! Command-line interface for emoji-mixer.
//!
//! This module handles argument parsing and the subcommands: artifact builds,
//! catalog queries and the encoding helpers.

use crate::store::{CatalogStore, load_emoji_index};
use crate::suggest::{SuggestionLimits, suggest};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use emoji_mixer_builder::{BuildPaths, run_emoji_index, run_pair_mixes};
use emoji_mixer_catalog::{
    Catalog, PairKey, decode, encode, is_codepoint_string, split_glyphs,
};
use emoji_mixer_config::{Config, LogLevel};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// emoji-mixer - Pick two emoji and look up their mashup
#[derive(Parser, Debug)]
#[command(name = "emoji-mixer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the built artifacts (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub public_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/emoji-mixer/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build emojiIndex.json and pairMixes.json from the raw emoji metadata
    Build {
        /// Raw metadata file (overrides the config file)
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,
    },

    /// Show the mix for two emoji
    Lookup {
        /// First emoji, as a glyph or a codepoint string such as 1f600.
        /// Both emoji may also be given together, e.g. "😀🔥"
        a: String,
        /// Second emoji
        b: Option<String>,
    },

    /// Suggest related mixes for two emoji
    Suggest { a: String, b: Option<String> },

    /// List the codepoints that have a mix with an emoji
    Partners { emoji: String },

    /// Print the codepoint string of an emoji
    Encode { emoji: String },

    /// Print the emoji for a codepoint string
    Decode { codepoints: String },

    /// Print the normalized pair key for two emoji
    Key { a: String, b: Option<String> },
}

/// Load the config from `path`, or from the default location.
///
/// A `--public-dir` override is applied on top.
pub fn load_config(path: Option<&Path>, public_dir: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    Ok(match public_dir {
        Some(dir) => config.with_public_dir(dir.to_string_lossy()),
        None => config,
    })
}

/// Interpret a glyph argument: codepoint strings are decoded, anything else
/// is taken as the glyph itself.
pub fn resolve_glyph(arg: &str) -> Result<String> {
    let arg = arg.trim();
    if is_codepoint_string(arg) {
        decode(arg).with_context(|| format!("Invalid codepoint string '{arg}'"))
    } else {
        Ok(arg.to_string())
    }
}

/// Interpret the two emoji of a pair command.
///
/// With a second argument each side goes through [`resolve_glyph`]. Without
/// one, the first argument must hold exactly two glyphs, such as "😀🔥".
pub fn resolve_pair(a: &str, b: Option<&str>) -> Result<(String, String)> {
    if let Some(b) = b {
        return Ok((resolve_glyph(a)?, resolve_glyph(b)?));
    }
    match split_glyphs(a.trim()).as_slice() {
        [first, second] => Ok((first.to_string(), second.to_string())),
        glyphs => bail!("Expected two emoji in '{a}', found {}", glyphs.len()),
    }
}

fn load_catalog(config: &Config) -> Result<Arc<Catalog>> {
    let store = CatalogStore::new();
    let path = config.pair_mixes_path();
    store
        .reload(&path, config.catalog_load_retries)
        .with_context(|| format!("Could not load the mix catalog from {}", path.display()))
}

/// Run one subcommand, writing its output to `out`.
pub fn run_command(command: &Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Build { source } => {
            let paths = BuildPaths {
                source: source
                    .clone()
                    .unwrap_or_else(|| config.resolved_source_path()),
                emoji_index: config.emoji_index_path(),
                pair_mixes: config.pair_mixes_path(),
            };
            let index = run_emoji_index(&paths)?;
            writeln!(out, "Wrote {} emoji to {}", index.count, index.output.display())?;
            let pairs = run_pair_mixes(&paths)?;
            writeln!(out, "Wrote {} pairs to {}", pairs.count, pairs.output.display())?;
        }

        Commands::Lookup { a, b } => {
            let (a, b) = resolve_pair(a, b.as_deref())?;
            let catalog = load_catalog(config)?;
            match catalog.resolve_mix(&a, &b) {
                Some(mix) => writeln!(out, "{}", serde_json::to_string_pretty(&mix)?)?,
                None => writeln!(out, "no mix for this pair")?,
            }
        }

        Commands::Suggest { a, b } => {
            let (a, b) = resolve_pair(a, b.as_deref())?;
            let catalog = load_catalog(config)?;
            let path = config.emoji_index_path();
            let emojis = load_emoji_index(&path)
                .with_context(|| format!("Could not load the emoji index from {}", path.display()))?;
            let results = suggest(
                &a,
                &b,
                &catalog,
                &emojis,
                SuggestionLimits::from_config(config),
            );
            writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
        }

        Commands::Partners { emoji } => {
            let glyph = resolve_glyph(emoji)?;
            let catalog = load_catalog(config)?;
            if let Some(partners) = catalog.partners_of_glyph(&glyph) {
                for codepoint in partners {
                    match decode(codepoint) {
                        Ok(partner) => writeln!(out, "{codepoint}\t{partner}")?,
                        Err(_) => writeln!(out, "{codepoint}")?,
                    }
                }
            }
        }

        Commands::Encode { emoji } => {
            writeln!(out, "{}", encode(&resolve_glyph(emoji)?))?;
        }

        Commands::Decode { codepoints } => {
            let glyph = decode(codepoints)
                .with_context(|| format!("Invalid codepoint string '{codepoints}'"))?;
            writeln!(out, "{glyph}")?;
        }

        Commands::Key { a, b } => {
            let (a, b) = resolve_pair(a, b.as_deref())?;
            let Some(key) = PairKey::from_glyphs(&a, &b) else {
                bail!("Two emoji are required to form a pair key");
            };
            writeln!(out, "{key}")?;
        }
    }
    Ok(())
}
