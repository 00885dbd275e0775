//! Merging new settings into the saved document.
//!
//! # Merge Rules
//!
//! - Objects are merged recursively
//! - Arrays are replaced entirely (not concatenated)
//! - Scalars and `null` in the new settings replace the saved value
//! - Keys only present in the saved document are kept
//!
//! `null` never deletes a key, so every key passed to a save is present in
//! the document afterwards.

use serde_json::{Map, Value};

/// Merge `overlay` into `base`, consuming both. `overlay` wins at every
/// point of conflict.
pub fn merge_settings(
    mut base: Map<String, Value>,
    overlay: Map<String, Value>,
) -> Map<String, Value> {
    for (key, overlay_value) in overlay {
        let merged = match base.remove(&key) {
            Some(Value::Object(base_obj)) => match overlay_value {
                Value::Object(overlay_obj) => Value::Object(merge_settings(base_obj, overlay_obj)),
                other => other,
            },
            _ => overlay_value,
        };
        base.insert(key, merged);
    }
    base
}
