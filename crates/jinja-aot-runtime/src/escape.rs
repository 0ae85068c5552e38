//! HTML escaping for interpolated text.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::value::Value;

static ESCAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("[&<>\"'`]").expect("escape pattern is valid"));

fn entity(c: &str) -> &'static str {
    match c {
        "&" => "&amp;",
        "<" => "&lt;",
        ">" => "&gt;",
        "\"" => "&#34;",
        "'" => "&#x27;",
        _ => "&#x60;",
    }
}

/// Escape the six markup-significant characters of a string.
///
/// Returns the input borrowed when nothing needs escaping. Not idempotent:
/// an already escaped `&amp;` becomes `&amp;amp;`.
pub fn escape_str(s: &str) -> Cow<'_, str> {
    ESCAPE_REGEX.replace_all(s, |caps: &Captures<'_>| entity(&caps[0]))
}

/// Escape a value for interpolation. Null and undefined render as nothing.
pub fn escape(value: &Value) -> String {
    if value.is_absent() {
        return String::new();
    }
    escape_str(&value.to_text()).into_owned()
}
