//! Uniform iteration over sequences and mappings.
//!
//! Generated loops call [`for_each`] (or walk [`entries`]) without knowing
//! whether the loop target is a list or a mapping. Values that cannot be
//! enumerated produce no iterations.

use std::borrow::Cow;
use std::fmt;

use crate::value::Value;

/// Position of a loop item within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKey<'a> {
    /// Index into an array.
    Index(usize),
    /// Position of a character in a string. Like an object key it reaches
    /// templates as text, so the first character's key is `"0"`.
    CharIndex(usize),
    /// Key of an object.
    Key(&'a str),
}

impl LoopKey<'_> {
    /// The key as a template value: array indices are numbers, character
    /// positions and object keys are strings.
    pub fn to_value(self) -> Value {
        match self {
            LoopKey::Index(i) => Value::from(i),
            LoopKey::CharIndex(i) => Value::from(i.to_string()),
            LoopKey::Key(k) => Value::from(k),
        }
    }
}

impl fmt::Display for LoopKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopKey::Index(i) | LoopKey::CharIndex(i) => write!(f, "{i}"),
            LoopKey::Key(k) => f.write_str(k),
        }
    }
}

/// Iterator over `(value, key)` pairs of a collection, see [`entries`].
#[derive(Debug)]
pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

#[derive(Debug)]
enum EntriesInner<'a> {
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Mapping(indexmap::map::Iter<'a, String, Value>),
    Chars(std::iter::Enumerate<std::str::Chars<'a>>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Cow<'a, Value>, LoopKey<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Sequence(iter) => iter
                .next()
                .map(|(i, item)| (Cow::Borrowed(item), LoopKey::Index(i))),
            EntriesInner::Mapping(iter) => iter
                .next()
                .map(|(k, v)| (Cow::Borrowed(v), LoopKey::Key(k.as_str()))),
            EntriesInner::Chars(iter) => iter
                .next()
                .map(|(i, c)| (Cow::Owned(Value::from(c.to_string())), LoopKey::CharIndex(i))),
            EntriesInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Sequence(iter) => iter.size_hint(),
            EntriesInner::Mapping(iter) => iter.size_hint(),
            EntriesInner::Chars(iter) => iter.size_hint(),
            EntriesInner::Empty => (0, Some(0)),
        }
    }
}

/// Enumerate a collection: arrays by index, objects in insertion order,
/// strings by character. Anything else yields nothing.
pub fn entries(collection: &Value) -> Entries<'_> {
    let inner = match collection {
        Value::Array(items) => EntriesInner::Sequence(items.iter().enumerate()),
        Value::Object(map) => EntriesInner::Mapping(map.iter()),
        Value::String(s) => EntriesInner::Chars(s.chars().enumerate()),
        other => {
            tracing::trace!(kind = %other.kind(), "iteration over non-enumerable value is a no-op");
            EntriesInner::Empty
        }
    };
    Entries { inner }
}

/// Call `visitor(value, key)` for every entry of `collection`.
pub fn for_each<F>(collection: &Value, mut visitor: F)
where
    F: FnMut(&Value, LoopKey<'_>),
{
    for (value, key) in entries(collection) {
        visitor(&value, key);
    }
}
