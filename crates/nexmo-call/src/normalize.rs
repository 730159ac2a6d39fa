//! Response key normalization.

use serde_json::Value;

/// Replace every `-` in mapping keys with `_`, recursing through nested
/// mappings and sequences. Values and key order are left untouched.
///
/// If two keys collide after renaming, the later one wins.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key.replace('-', "_"), normalize_keys(val)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        scalar => scalar,
    }
}
