//! Codec for ordered sequences persisted as JSON-array text columns.
//!
//! Several columns (character tags, skills, relationships, outline sections)
//! store a whole `Vec<T>` as a single JSON array in a `TEXT` column. Reads
//! must never fail because one of those blobs is corrupted, so [`decode`]
//! logs the problem and substitutes an empty sequence.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Text written for an empty (or unserialisable) sequence.
pub const EMPTY_ARRAY: &str = "[]";

/// Serialise `items` as a JSON array.
///
/// An empty slice encodes to `"[]"`, never to `null` or an empty string.
pub fn encode<T: Serialize>(items: &[T]) -> String {
    if items.is_empty() {
        return EMPTY_ARRAY.to_string();
    }
    match serde_json::to_string(items) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialise JSON array column");
            EMPTY_ARRAY.to_string()
        }
    }
}

/// Parse a JSON-array column back into its elements.
///
/// `None`, blank text, malformed JSON and well-formed JSON of the wrong
/// shape all yield an empty `Vec`. Only the latter two are logged.
pub fn decode<T: DeserializeOwned>(text: Option<&str>) -> Vec<T> {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<T>>(text) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                error = %e,
                len = text.len(),
                "Malformed JSON array column, substituting empty list"
            );
            Vec::new()
        }
    }
}

/// Cheap structural check: does `text` parse as a JSON array?
///
/// Objects, scalars and `null` parse as JSON but are not arrays, so they are
/// rejected. Blank text is accepted because it decodes to an empty list.
pub fn is_valid(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    matches!(
        serde_json::from_str::<serde_json::Value>(text),
        Ok(serde_json::Value::Array(_))
    )
}

/// Serde helper: treat an explicit JSON `null` list the same as a missing one.
///
/// Older blobs were written by a serialiser that emitted `null` for unset
/// lists; use together with `#[serde(default)]`.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
