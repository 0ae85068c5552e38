//! Collection filters: `batch`, `slice`, `default`, `first`, `last`, `size`.

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::error::{Result, RuntimeError};
use crate::semantics::is_truthy;
use crate::value::{Kind, Value};

fn too_large(filter: &'static str, expected: &'static str) -> RuntimeError {
    tracing::debug!(filter, "count argument too large to allocate");
    RuntimeError::invalid_argument(filter, expected, Kind::Number)
}

/// Split `items` into consecutive chunks of `size`; the last chunk may be
/// shorter unless `fill_with` pads it up to `size`.
///
/// Fails when the padding cannot be allocated.
pub fn batch(
    items: &[Value],
    size: NonZeroUsize,
    fill_with: Option<&Value>,
) -> Result<Vec<Vec<Value>>> {
    let size = size.get();
    let mut batches: Vec<Vec<Value>> = items.chunks(size).map(<[Value]>::to_vec).collect();
    if let (Some(fill), Some(last)) = (fill_with, batches.last_mut()) {
        last
            .try_reserve_exact(size - last.len())
            .map_err(|_| too_large("batch", "a batch size that fits in memory"))?;
        last.resize(size, fill.clone());
    }
    Ok(batches)
}

/// Piece boundaries for `slice`: `len % slices` leading pieces carry one
/// extra element. The flag marks those pieces.
fn slice_ranges(len: usize, slices: usize) -> Result<Vec<(Range<usize>, bool)>> {
    let mut ranges = Vec::new();
    if slices == 0 {
        return Ok(ranges);
    }
    ranges
        .try_reserve_exact(slices)
        .map_err(|_| too_large("slice", "a slice count that fits in memory"))?;

    let per_slice = len / slices;
    let with_extra = len % slices;
    let mut offset = 0;
    for i in 0..slices {
        let start = offset + i * per_slice;
        if i < with_extra {
            offset += 1;
        }
        let end = offset + (i + 1) * per_slice;
        ranges.push((start..end, i < with_extra));
    }
    Ok(ranges)
}

/// Split `items` into `slices` pieces as evenly as possible, larger pieces
/// first. With `fill_with`, every piece without an extra element gets one
/// `fill_with` appended.
pub fn slice(items: &[Value], slices: usize, fill_with: Option<&Value>) -> Result<Vec<Vec<Value>>> {
    let pieces = slice_ranges(items.len(), slices)?
        .into_iter()
        .map(|(range, has_extra)| {
            let mut piece = items[range].to_vec();
            if let (Some(fill), false) = (fill_with, has_extra) {
                piece.push(fill.clone());
            }
            piece
        })
        .collect();
    Ok(pieces)
}

/// [`slice`] over the characters of a string.
pub fn slice_str(s: &str, slices: usize) -> Result<Vec<String>> {
    let chars: Vec<char> = s.chars().collect();
    let pieces = slice_ranges(chars.len(), slices)?
        .into_iter()
        .map(|(range, _)| chars[range].iter().collect())
        .collect();
    Ok(pieces)
}

/// `value`, or `default_value` when `value` is undefined. With `boolean`,
/// anything falsy (see [`is_truthy`]) is replaced too.
pub fn default(value: &Value, default_value: &Value, boolean: bool) -> Value {
    let keep = if boolean {
        is_truthy(value)
    } else {
        !value.is_undefined()
    };
    if keep {
        value.clone()
    } else {
        default_value.clone()
    }
}

/// First array element. Undefined for an empty array, null for anything else.
pub fn first(value: &Value) -> Value {
    match value {
        Value::Array(items) => items.first().cloned().unwrap_or_default(),
        _ => Value::Null,
    }
}

/// Last array element. Undefined for an empty array, null for anything else.
pub fn last(value: &Value) -> Value {
    match value {
        Value::Array(items) => items.last().cloned().unwrap_or_default(),
        _ => Value::Null,
    }
}

/// Array length, object key count, or string character count; 0 otherwise.
pub fn size(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::String(s) => s.chars().count(),
        _ => 0,
    }
}
