//! The template `in` operator.

use crate::semantics::equality::equals;
use crate::value::Value;

/// Whether `needle` occurs in `haystack`.
///
/// For an object the candidates are its keys, for an array its elements; any
/// other haystack contains nothing. Without `deep` candidates are matched by
/// identity (SameValueZero), so a structurally equal but distinct array is not
/// found. With `deep` each candidate is compared with [`equals`].
pub fn contains(needle: &Value, haystack: &Value, deep: bool) -> bool {
    let matches = |candidate: &Value| {
        if deep {
            equals(needle, candidate)
        } else {
            needle.is_same_value_zero(candidate)
        }
    };

    match haystack {
        Value::Object(map) => match needle {
            // keys are strings, so only a string needle can match them
            Value::String(s) if !deep => map.contains_key(&**s),
            _ => map.keys().any(|key| matches(&Value::from(key.as_str()))),
        },
        Value::Array(items) => items.iter().any(matches),
        _ => false,
    }
}
