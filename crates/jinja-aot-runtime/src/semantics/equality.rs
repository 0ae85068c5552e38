//! Structural equality for the template `==` operator.

use crate::value::Value;

/// Deep equality.
///
/// Identical values short-circuit to `true`. Values of different kinds are
/// never equal and there is no coercion between scalars. Arrays compare
/// position by position; objects compare key sets (order ignored) and the
/// values under each key.
pub fn equals(a: &Value, b: &Value) -> bool {
    if a.is_identical(b) {
        return true;
    }

    if a.kind() != b.kind() {
        return false;
    }

    match (a, b) {
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right.iter()).all(|(x, y)| equals(x, y))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, x)| right.get(key).is_some_and(|y| equals(x, y)))
        }
        _ => false,
    }
}
