//! Registry adapters for the built-in filters.
//!
//! Each adapter unpacks positional template arguments, applies the template
//! defaults, and calls the typed filter in [`super::text`] or
//! [`super::collections`].

use std::num::NonZeroUsize;

use super::args::{clamp_count, Args};
use super::{collections, text, FilterRegistry};
use crate::error::{Result, RuntimeError};
use crate::value::{Kind, Value};

/// Register every built-in filter and the upstream aliases.
pub(super) fn register(registry: &mut FilterRegistry) {
    registry.register("capitalize", capitalize);
    registry.register("batch", batch);
    registry.register("default", default);
    registry.register("int", int);
    registry.register("slice", slice);
    registry.register("title", title);
    registry.register("truncate", truncate);
    registry.register("first", first);
    registry.register("last", last);
    registry.register("size", size);

    registry.alias("length", "size");
    registry.alias("count", "size");
    registry.alias("d", "default");
}

fn capitalize(value: &Value, _args: &[Value]) -> Result<Value> {
    if !value.is_native_truthy() {
        return Ok(value.clone());
    }
    match value {
        Value::String(s) => Ok(Value::from(text::capitalize(s))),
        other => Err(RuntimeError::invalid_argument(
            "capitalize",
            "a string",
            other.kind(),
        )),
    }
}

fn batch(value: &Value, args: &[Value]) -> Result<Value> {
    let args = Args::new("batch", args);
    let items = value
        .as_array()
        .ok_or_else(|| args.invalid("an array", value))?;
    let size = NonZeroUsize::new(args.count(0, "size")?).ok_or_else(|| {
        RuntimeError::invalid_argument("batch", "a positive batch size", Kind::Number)
    })?;

    let batches = collections::batch(items, size, args.get(1))?;
    Ok(Value::array(batches))
}

fn default(value: &Value, args: &[Value]) -> Result<Value> {
    let args = Args::new("default", args);
    let fallback = args.get(0).cloned().unwrap_or_else(|| Value::from(""));
    let boolean = matches!(args.get(1), Some(Value::Bool(true)));
    Ok(collections::default(value, &fallback, boolean))
}

fn int(value: &Value, args: &[Value]) -> Result<Value> {
    let args = Args::new("int", args);
    let fallback = args.get(0).cloned().unwrap_or(Value::Number(0.0));
    Ok(text::int(value, fallback))
}

fn slice(value: &Value, args: &[Value]) -> Result<Value> {
    let args = Args::new("slice", args);
    let slices = args.integer(args.number(0, "slices")?)?;
    let fill_with = args.present(1);

    match value {
        Value::Array(items) => Ok(Value::array(collections::slice(items, slices, fill_with)?)),
        Value::String(s) => match fill_with {
            None => Ok(Value::array(collections::slice_str(s, slices)?)),
            Some(_) => Err(RuntimeError::invalid_argument(
                "slice",
                "an array when filling",
                Kind::String,
            )),
        },
        other => Err(args.invalid("an array or string", other)),
    }
}

fn title(value: &Value, _args: &[Value]) -> Result<Value> {
    Ok(Value::from(text::title(&value.to_text())))
}

fn truncate(value: &Value, args: &[Value]) -> Result<Value> {
    let args = Args::new("truncate", args);
    let length = args.optional_number(0, text::DEFAULT_TRUNCATE_LENGTH as f64)?;
    let killwords = args.get(1).is_some_and(Value::is_native_truthy);
    let end = args
        .get(2)
        .map(|v| v.to_text().into_owned())
        .unwrap_or_else(|| text::DEFAULT_TRUNCATE_END.to_string());

    Ok(Value::from(text::truncate(
        &value.to_text(),
        clamp_count(length),
        killwords,
        &end,
    )))
}

fn first(value: &Value, _args: &[Value]) -> Result<Value> {
    Ok(collections::first(value))
}

fn last(value: &Value, _args: &[Value]) -> Result<Value> {
    Ok(collections::last(value))
}

fn size(value: &Value, _args: &[Value]) -> Result<Value> {
    Ok(Value::from(collections::size(value)))
}
