//! Text filters: `capitalize`, `title`, `truncate`, `int`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

/// Leading base-10 integer after optional whitespace and sign.
static LEADING_INT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("integer pattern is valid"));

pub const DEFAULT_TRUNCATE_LENGTH: usize = 255;
pub const DEFAULT_TRUNCATE_END: &str = "...";

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case every space-delimited word: first character upper, rest lower.
///
/// Only single spaces separate words, so runs of spaces are kept as they are.
pub fn title(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorten `s` to at most `length` characters, `end` included.
///
/// Without `killwords` a word split by the cut is dropped along with the
/// space before it. A cut that lands on a space keeps its last word.
pub fn truncate(s: &str, length: usize, killwords: bool, end: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }

    let keep = length.saturating_sub(end.chars().count());
    let cut = match s.char_indices().nth(keep) {
        Some((idx, _)) => &s[..idx],
        None => s,
    };

    if killwords || s[cut.len()..].starts_with(' ') {
        return format!("{cut}{end}");
    }
    let kept = match cut.rfind(' ') {
        Some(idx) => &cut[..idx],
        None => "",
    };
    format!("{kept}{end}")
}

/// Parse the leading base-10 integer of `s`, ignoring anything after it.
pub fn parse_int(s: &str) -> Option<f64> {
    let caps = LEADING_INT_REGEX.captures(s)?;
    caps[1].parse::<f64>().ok()
}

/// The leading integer of `value`'s text form, or `default` when there is none.
pub fn int(value: &Value, default: Value) -> Value {
    match parse_int(&value.to_text()) {
        Some(n) => Value::Number(n),
        None => {
            tracing::trace!(kind = %value.kind(), "int filter fell back to its default");
            default
        }
    }
}
