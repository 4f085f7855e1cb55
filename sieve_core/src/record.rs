//! Value access into records
//!
//! Records are JSON documents. Fields are addressed by dot-separated paths
//! such as `address.city`.

use serde_json::Value;

/// A record being filtered
pub type Record = Value;

/// Resolves a dotted path against a record.
///
/// Missing keys, non-object intermediates and `null` all resolve to `None`.
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }
        current = current.as_object()?.get(segment)?;
    }

    match current {
        Value::Null => None,
        value => Some(value),
    }
}
