//! Catalog store tests against artifacts on disk.

mod common;

use common::TestWorkspace;
use emoji_mixer::store::{CatalogStore, LoadError, load_catalog};
use std::fs;

#[test]
fn test_reload_installs_catalog() {
    let workspace = TestWorkspace::built();
    let store = CatalogStore::new();
    assert!(!store.is_loaded());

    let catalog = store.reload(&workspace.pair_mixes_path(), 0).unwrap();
    assert!(store.is_loaded());
    assert_eq!(catalog.len(), 5);
    assert!(catalog.generated_at().is_some());
    assert!(store.snapshot().lookup("😀", "🔥").is_some());
}

#[test]
fn test_missing_artifact_is_read_error() {
    let workspace = TestWorkspace::new();
    let store = CatalogStore::new();
    let err = store.reload(&workspace.pair_mixes_path(), 1).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(!store.is_loaded());
    assert!(store.snapshot().is_empty());
}

#[test]
fn test_failed_reload_keeps_previous_snapshot() {
    let workspace = TestWorkspace::built();
    let store = CatalogStore::new();
    store.reload(&workspace.pair_mixes_path(), 0).unwrap();

    fs::write(workspace.pair_mixes_path(), "{ not json").unwrap();
    let err = store.reload(&workspace.pair_mixes_path(), 2).unwrap_err();
    assert!(matches!(err, LoadError::Artifact { .. }));

    let snap = store.snapshot();
    assert_eq!(snap.len(), 5);
    assert!(snap.lookup("🔥", "😀").is_some());
}

#[test]
fn test_late_load_does_not_overwrite_newer() {
    let workspace = TestWorkspace::built();
    let store = CatalogStore::new();

    let slow = store.begin_load();
    let fast = store.begin_load();

    assert!(store.apply(fast, load_catalog(&workspace.pair_mixes_path()).unwrap()));
    assert!(!store.apply(slow, emoji_mixer_catalog::Catalog::empty()));
    assert_eq!(store.snapshot().len(), 5);
}

#[test]
fn test_partner_index_rebuilt_on_reload() {
    let workspace = TestWorkspace::built();
    let store = CatalogStore::new();
    store.reload(&workspace.pair_mixes_path(), 0).unwrap();
    assert_eq!(store.snapshot().partners_of_glyph("😀").map(|p| p.len()), Some(3));

    fs::write(
        workspace.pair_mixes_path(),
        r#"{"generatedAt":"2024-01-01T00:00:00.000Z","count":0,"pairs":{}}"#,
    )
    .unwrap();
    store.reload(&workspace.pair_mixes_path(), 0).unwrap();
    assert!(store.snapshot().partners_of_glyph("😀").is_none());
}
