//! Offline builders for emoji-mixer.
//!
//! Both builders read the same raw emoji metadata (`emoji.json`) and write
//! one static artifact each:
//!
//! - [`run_emoji_index`]: `public/emojiIndex.json`, the pickable emoji
//!   sorted by rank
//! - [`run_pair_mixes`]: `public/pairMixes.json`, one mashup per unordered
//!   pair, newest date wins
//!
//! A source that fails to parse, or has the wrong top-level shape, aborts
//! the build before anything is written.

pub mod artifact;
pub mod emoji_index;
pub mod error;
pub mod pair_mixes;
pub mod source;

pub use emoji_index::{build_emoji_index, build_emoji_records};
pub use error::BuildError;
pub use pair_mixes::{build_pair_mixes, build_pair_records};

use std::fs;
use std::path::{Path, PathBuf};

/// Default raw metadata file, relative to the working directory.
pub const DEFAULT_SOURCE_PATH: &str = "emoji.json";
/// Default directory the artifacts are written to.
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const EMOJI_INDEX_FILE: &str = "emojiIndex.json";
pub const PAIR_MIXES_FILE: &str = "pairMixes.json";

/// Input and output locations for a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub source: PathBuf,
    pub emoji_index: PathBuf,
    pub pair_mixes: PathBuf,
}

impl Default for BuildPaths {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH, DEFAULT_PUBLIC_DIR)
    }
}

impl BuildPaths {
    /// Paths for a source file and a public directory, using the standard
    /// artifact file names.
    pub fn new(source: impl Into<PathBuf>, public_dir: impl AsRef<Path>) -> Self {
        let public_dir = public_dir.as_ref();
        Self {
            source: source.into(),
            emoji_index: public_dir.join(EMOJI_INDEX_FILE),
            pair_mixes: public_dir.join(PAIR_MIXES_FILE),
        }
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub count: usize,
}

fn read_source(path: &Path) -> Result<Vec<serde_json::Value>, BuildError> {
    log::info!("Reading emoji source from {:?}", path);
    let text = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    source::parse_source(&text)
}

/// Build `emojiIndex.json` from the source.
pub fn run_emoji_index(paths: &BuildPaths) -> Result<BuildReport, BuildError> {
    let items = read_source(&paths.source)?;
    let artifact = build_emoji_index(&items, artifact::generated_at());
    artifact::write_json(&paths.emoji_index, &artifact)?;

    log::info!(
        "Wrote {} emoji records to {:?}",
        artifact.count,
        paths.emoji_index
    );
    Ok(BuildReport {
        output: paths.emoji_index.clone(),
        count: artifact.count,
    })
}

/// Build `pairMixes.json` from the source.
pub fn run_pair_mixes(paths: &BuildPaths) -> Result<BuildReport, BuildError> {
    let items = read_source(&paths.source)?;
    let artifact = build_pair_mixes(&items, artifact::generated_at());
    artifact::write_json(&paths.pair_mixes, &artifact)?;

    log::info!("Wrote {} pairs to {:?}", artifact.count, paths.pair_mixes);
    Ok(BuildReport {
        output: paths.pair_mixes.clone(),
        count: artifact.count,
    })
}
