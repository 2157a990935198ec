//! JSON utilities
//!
//! serde_json keeps insertion order (`preserve_order`), so anything that
//! must be reproducible goes through [`sort_keys`] first.

use serde_json::{Map, Value as JsonValue};

/// Recursively reorder every object so its keys are lexicographic
pub fn sort_keys(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            let mut entries: Vec<(String, JsonValue)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: Map<String, JsonValue> = entries
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            JsonValue::Object(sorted)
        }
        JsonValue::Array(items) => JsonValue::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Compact JSON text with lexicographically ordered keys
pub fn to_sorted_string(value: JsonValue) -> String {
    // Serializing a Value cannot fail: all map keys are strings
    serde_json::to_string(&sort_keys(value)).unwrap_or_default()
}
