//! Coarse classification of runtime values.

use std::fmt;

use super::Value;

/// The kind of a value. Every value has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Array,
    Object,
    String,
    Number,
    Boolean,
    /// `null` or `undefined`.
    Absent,
    /// Anything the runtime treats as an opaque scalar (extension functions).
    Opaque,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Absent => "null",
            Kind::Opaque => "opaque value",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value. Never fails.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
        Value::String(_) => Kind::String,
        Value::Number(_) => Kind::Number,
        Value::Bool(_) => Kind::Boolean,
        Value::Null | Value::Undefined => Kind::Absent,
        Value::Function(_) => Kind::Opaque,
    }
}
