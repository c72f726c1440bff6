// Library exports for the emoji-mixer binaries and integration tests.
//
// The pure pieces (codepoint encoding, pair keys, record types, catalog
// lookup) live in `emoji-mixer-catalog`; the offline builders live in
// `emoji-mixer-builder`. This crate adds the runtime around them: the
// reloadable catalog store, suggestions, session state and the CLI.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod logging;
pub mod session;
pub mod store;
pub mod suggest;

pub use emoji_mixer_catalog as catalog;
