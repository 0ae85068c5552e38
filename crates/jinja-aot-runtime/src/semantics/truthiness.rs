//! Truthiness for template conditionals.

use crate::value::Value;

/// Whether a value counts as true in an `if`.
///
/// Differs from [`Value::is_native_truthy`] for containers: an empty array or
/// an object without keys is false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        other => other.is_native_truthy(),
    }
}
