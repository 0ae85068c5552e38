//! Positional argument extraction for registered filters.

use crate::error::{Result, RuntimeError};
use crate::value::{Kind, Value};

/// Floats at or above this do not fit in a `usize`.
const USIZE_LIMIT: f64 = usize::MAX as f64;

/// Positional arguments of one filter call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Args<'a> {
    filter: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub(crate) fn new(filter: &'static str, values: &'a [Value]) -> Self {
        Self { filter, values }
    }

    /// The argument at `index`, with an explicit `undefined` treated as not passed.
    pub(crate) fn get(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index).filter(|v| !v.is_undefined())
    }

    /// Like [`Args::get`], but `null` also counts as not passed.
    pub(crate) fn present(&self, index: usize) -> Option<&'a Value> {
        self.get(index).filter(|v| !v.is_absent())
    }

    pub(crate) fn number(&self, index: usize, name: &'static str) -> Result<f64> {
        match self.get(index) {
            Some(Value::Number(n)) => Ok(*n),
            Some(other) => Err(self.invalid("a numeric argument", other)),
            None => Err(RuntimeError::missing_argument(self.filter, name)),
        }
    }

    pub(crate) fn optional_number(&self, index: usize, default: f64) -> Result<f64> {
        match self.get(index) {
            Some(Value::Number(n)) => Ok(*n),
            Some(other) => Err(self.invalid("a numeric argument", other)),
            None => Ok(default),
        }
    }

    /// A non-negative integer count that fits in `usize`.
    pub(crate) fn count(&self, index: usize, name: &'static str) -> Result<usize> {
        let n = self.number(index, name)?;
        if n < 0.0 {
            return Err(RuntimeError::invalid_argument(
                self.filter,
                "a non-negative integer",
                Kind::Number,
            ));
        }
        self.integer(n)
    }

    /// `n` as a `usize`, rejecting fractions, `NaN`, infinities and values
    /// past `usize::MAX`. Negative integers saturate to zero.
    pub(crate) fn integer(&self, n: f64) -> Result<usize> {
        // fract() of an infinity or NaN is NaN
        if n.fract() != 0.0 || n >= USIZE_LIMIT {
            return Err(RuntimeError::invalid_argument(
                self.filter,
                "an integer count",
                Kind::Number,
            ));
        }
        Ok(n.max(0.0) as usize)
    }

    pub(crate) fn invalid(&self, expected: &'static str, found: &Value) -> RuntimeError {
        RuntimeError::invalid_argument(self.filter, expected, found.kind())
    }
}

/// Clamp a template number into a character count. Negative and `NaN`
/// become zero, fractions are truncated.
pub(crate) fn clamp_count(n: f64) -> usize {
    if n.is_nan() || n <= 0.0 {
        0
    } else if n.is_infinite() {
        usize::MAX
    } else {
        n.trunc() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_counts_as_missing() {
        let values = [Value::Undefined, Value::Null];
        let args = Args::new("t", &values);
        assert!(args.get(0).is_none());
        assert!(args.get(1).is_some());
        assert!(args.present(1).is_none());
        assert!(args.get(5).is_none());
    }

    #[test]
    fn test_number_errors() {
        let values = [Value::from("3")];
        let args = Args::new("t", &values);
        assert!(matches!(
            args.number(0, "size"),
            Err(RuntimeError::InvalidArgument { .. })
        ));
        assert!(matches!(
            args.number(1, "size"),
            Err(RuntimeError::MissingArgument { argument: "size", .. })
        ));
        assert_eq!(args.optional_number(1, 255.0).unwrap(), 255.0);
    }

    #[test]
    fn test_count_rejects_fractions_and_negatives() {
        let values = [Value::from(2.5), Value::from(-1), Value::from(4)];
        let args = Args::new("t", &values);
        assert!(args.count(0, "n").is_err());
        assert!(args.count(1, "n").is_err());
        assert_eq!(args.count(2, "n").unwrap(), 4);
    }

    #[test]
    fn test_count_rejects_values_outside_usize() {
        let values = [
            Value::from(f64::INFINITY),
            Value::from(f64::NAN),
            Value::from(2e19),
            Value::from(1e300),
        ];
        let args = Args::new("t", &values);
        for index in 0..values.len() {
            assert!(matches!(
                args.count(index, "n"),
                Err(RuntimeError::InvalidArgument { found: Kind::Number, .. })
            ));
        }
    }

    #[test]
    fn test_integer_saturates_negatives() {
        let args = Args::new("t", &[]);
        assert_eq!(args.integer(-3.0).unwrap(), 0);
        assert!(args.integer(f64::NEG_INFINITY).is_err());
        assert!(args.integer(-0.5).is_err());
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(-3.0), 0);
        assert_eq!(clamp_count(f64::NAN), 0);
        assert_eq!(clamp_count(7.9), 7);
    }
}
