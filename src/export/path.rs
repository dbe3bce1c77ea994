//! Dot-path resolution against a record
//!
//! A path such as `customer.name` addresses a field nested one or more
//! objects deep. Only plain object traversal is supported: no array
//! indexing, no wildcards.

use serde_json::Value;

use crate::records::DataRecord;

/// Separator between path segments
pub const PATH_SEPARATOR: char = '.';

/// Resolve a dot-separated path against a record
///
/// Returns `None` when any segment is missing or when an intermediate value
/// is not an object. A present `null` resolves to `Some(Value::Null)`.
pub fn resolve_path<'a>(record: &'a DataRecord, path: &str) -> Option<&'a Value> {
    let mut segments = path.split(PATH_SEPARATOR);

    let first = segments.next()?;
    let mut current = record.get(first)?;

    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }

    Some(current)
}
