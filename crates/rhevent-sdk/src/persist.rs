//! JSON persistence and collection helpers.

use crate::error::SdkError;
use crate::Document;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Status value of an event that is currently running
pub const ACTIVE_STATUS: &str = "active";

/// Write `value` to `path` as pretty-printed JSON, replacing any existing file
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<(), SdkError> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Read a JSON document from `path`
pub fn load_json(path: impl AsRef<Path>) -> Result<Document, SdkError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Entries of `collection["events"]` whose `status` is `"active"`
///
/// A collection without an `events` array has no active entries.
pub fn filter_active(collection: &Document) -> Vec<Document> {
    collection
        .get("events")
        .and_then(Document::as_array)
        .map(|events| {
            events
                .iter()
                .filter(|event| event.get("status").and_then(Document::as_str) == Some(ACTIVE_STATUS))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
