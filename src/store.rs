//! Catalog store: the current catalog snapshot and its reload protocol.
//!
//! Readers take an `Arc<Catalog>` snapshot without locking. A reload builds a
//! complete new catalog (partner index included) and swaps it in atomically.
//! Loads are numbered by ticket, and a load that finishes after a newer one
//! has already been applied is dropped.

use arc_swap::ArcSwap;
use emoji_mixer_catalog::{
    ArtifactError, Catalog, EmojiIndex, EmojiIndexArtifact, PairMixArtifact,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// A runtime artifact could not be loaded. The caller may retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid artifact '{path}': {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },
}

/// Identifies one load attempt; later tickets supersede earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Read and parse `pairMixes.json` into a catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact = PairMixArtifact::from_json(&text).map_err(|source| LoadError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Catalog::from_artifact(artifact))
}

/// Read and parse `emojiIndex.json` into the pickable emoji list.
pub fn load_emoji_index(path: &Path) -> Result<EmojiIndex, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact =
        EmojiIndexArtifact::from_json(&text).map_err(|source| LoadError::Artifact {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(EmojiIndex::from_artifact(artifact))
}

/// The installed catalog together with the load that produced it.
struct Installed {
    /// Ticket of the load (0 = nothing loaded yet)
    ticket: u64,
    catalog: Arc<Catalog>,
}

/// Holds the current catalog snapshot.
pub struct CatalogStore {
    /// Ticket and catalog are published together so a late load can never
    /// install its catalog under a newer ticket.
    state: ArcSwap<Installed>,
    /// Last ticket handed out by `begin_load`
    issued: AtomicU64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// A store holding an empty catalog.
    pub fn new() -> Self {
        Self {
            state: ArcSwap::from_pointee(Installed {
                ticket: 0,
                catalog: Arc::new(Catalog::empty()),
            }),
            issued: AtomicU64::new(0),
        }
    }

    /// The current snapshot. Stays valid even if a reload swaps in a new one.
    #[inline]
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.state.load().catalog)
    }

    /// True once any load has been applied.
    pub fn is_loaded(&self) -> bool {
        self.state.load().ticket != 0
    }

    /// Start a load attempt.
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Install `catalog` for `ticket` unless a newer ticket is already installed.
    ///
    /// Returns true if the catalog was installed.
    pub fn apply(&self, ticket: LoadTicket, catalog: Catalog) -> bool {
        let pairs = catalog.len();
        let next = Arc::new(Installed {
            ticket: ticket.0,
            catalog: Arc::new(catalog),
        });

        loop {
            let old = self.state.load_full();
            if ticket.0 <= old.ticket {
                log::debug!(
                    "Ignoring stale catalog load {} (already applied {})",
                    ticket.0,
                    old.ticket
                );
                return false;
            }

            let prev = self.state.compare_and_swap(&old, Arc::clone(&next));
            if Arc::ptr_eq(&prev, &old) {
                break;
            }
            // Another load was published in between; check its ticket again.
        }

        log::info!("Installed catalog with {} pairs (load {})", pairs, ticket.0);
        true
    }

    /// Load the pair-mix artifact at `path` and install it.
    ///
    /// A failed attempt is retried up to `retries` more times. If every
    /// attempt fails the previous snapshot stays installed and the last error
    /// is returned.
    pub fn reload(&self, path: &Path, retries: u32) -> Result<Arc<Catalog>, LoadError> {
        let ticket = self.begin_load();
        let mut attempt = 0;
        let catalog = loop {
            match load_catalog(path) {
                Ok(catalog) => break catalog,
                Err(e) if attempt < retries => {
                    attempt += 1;
                    log::warn!("Catalog load failed ({e}), retry {attempt}/{retries}");
                }
                Err(e) => {
                    log::error!("Could not load emoji mix catalog: {e}");
                    return Err(e);
                }
            }
        };

        self.apply(ticket, catalog);
        Ok(self.snapshot())
    }
}
