use super::definition::Process;
use crate::error::SnapshotError;
use std::fs;

impl Process {
    /// Parses a single process snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::JsonParseError(e.to_string()))
    }

    /// Loads a process snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let content = read_snapshot_file(path)?;
        Self::from_json(&content)
    }
}

/// Parses a snapshot that may legitimately be absent.
///
/// A JSON `null` (or a blank document) means the caller has nothing to render
/// yet and yields `Ok(None)`.
pub fn snapshot_from_json(json: &str) -> Result<Option<Process>, SnapshotError> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<Process>>(json)
        .map_err(|e| SnapshotError::JsonParseError(e.to_string()))
}

/// File counterpart of [`snapshot_from_json`].
pub fn snapshot_from_file(path: &str) -> Result<Option<Process>, SnapshotError> {
    let content = read_snapshot_file(path)?;
    snapshot_from_json(&content)
}

fn read_snapshot_file(path: &str) -> Result<String, SnapshotError> {
    fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })
}
