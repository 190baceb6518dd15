//! Deep merge of untyped JSON values.

use serde_json::Value;

/// Merge `source` into `target`. Objects merge key-wise (recursively);
/// anything else replaces the value already in place. Later sources win.
pub fn merge_deep(target: &mut Value, source: Value) {
    match (&mut *target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, value) in source_map {
                match target_map.get_mut(&key) {
                    Some(slot) => merge_deep(slot, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (_, source) => *target = source,
    }
}

/// Fold a sequence of values into one merged document.
pub fn merge_all<I: IntoIterator<Item = Value>>(values: I) -> Value {
    let mut merged = Value::Null;
    for value in values {
        merge_deep(&mut merged, value);
    }
    merged
}
