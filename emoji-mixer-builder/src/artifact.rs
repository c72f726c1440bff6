//! Artifact output: generation timestamps and atomic JSON writes.

use crate::error::BuildError;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Current UTC time as an ISO 8601 string with millisecond precision,
/// e.g. `2024-03-01T12:00:00.000Z`.
pub fn generated_at() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize `value` as compact JSON and write it to `path`.
///
/// Writes to a temp file first and then renames it into place, so a failed
/// build never leaves a partial artifact behind.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BuildError> {
    let json = serde_json::to_string(value).map_err(BuildError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json).map_err(|e| BuildError::io(&temp_path, e))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(BuildError::io(path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_at_format() {
        let ts = generated_at();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        // YYYY-MM-DDTHH:MM:SS.mmmZ
        assert_eq!(ts.len(), 24);
    }

    #[test]
    fn test_write_creates_parent_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public").join("out.json");
        write_json(&path, &serde_json::json!({"count": 0})).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, r#"{"count":0}"#);
        assert!(!path.with_extension("json.tmp").exists());
    }
}
