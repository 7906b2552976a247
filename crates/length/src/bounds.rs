//! Word-count bounds and their coercion from loosely typed arguments.
//!
//! Agents do not always send numbers as numbers. A bound may arrive as `300`,
//! `300.0`, `"300"` or `" 300 "`, and all of those mean the same thing. Values
//! that cannot be read as an integer are an error of their own, separate from
//! any length verdict.
//!
//! | Argument | Result |
//! |----------|--------|
//! | absent | default bound |
//! | integer | as is |
//! | finite float | truncated toward zero |
//! | `true` / `false` | `1` / `0` |
//! | string | trimmed, parsed as a base-10 integer |
//! | `null`, array, object, unparsable string | [`LengthError::InvalidBound`] |
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LengthError;

pub const DEFAULT_MIN_WORDS: i64 = 260;
pub const DEFAULT_MAX_WORDS: i64 = 340;

/// Argument key for the lower bound.
pub const MIN_WORDS_KEY: &str = "min_words";
/// Argument key for the upper bound.
pub const MAX_WORDS_KEY: &str = "max_words";

/// An inclusive word-count range.
///
/// `min > max` is allowed; every count then falls outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for WordBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WORDS,
            max: DEFAULT_MAX_WORDS,
        }
    }
}

impl WordBounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `count` lies inside the range, boundaries included.
    pub fn contains(&self, count: usize) -> bool {
        let count = count_as_i64(count);
        self.min <= count && count <= self.max
    }

    /// Reads `min_words` / `max_words` from a tool argument object, falling
    /// back to `defaults` for each key that is absent.
    ///
    /// ```rust
    /// use length::WordBounds;
    /// use serde_json::json;
    ///
    /// let args = json!({"text": "...", "min_words": "200"});
    /// let bounds = WordBounds::from_args(&args, WordBounds::default()).unwrap();
    /// assert_eq!(bounds, WordBounds::new(200, 340));
    /// ```
    pub fn from_args(args: &Value, defaults: WordBounds) -> Result<Self, LengthError> {
        Self::from_values(args.get(MIN_WORDS_KEY), args.get(MAX_WORDS_KEY), defaults)
    }

    /// Builds bounds from two optional raw values.
    pub fn from_values(
        min: Option<&Value>,
        max: Option<&Value>,
        defaults: WordBounds,
    ) -> Result<Self, LengthError> {
        let min = match min {
            Some(value) => coerce_bound(MIN_WORDS_KEY, value)?,
            None => defaults.min,
        };
        let max = match max {
            Some(value) => coerce_bound(MAX_WORDS_KEY, value)?,
            None => defaults.max,
        };
        Ok(Self { min, max })
    }
}

pub(crate) fn count_as_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Reads one bound as an integer following the table in the module docs.
pub fn coerce_bound(field: &'static str, value: &Value) -> Result<i64, LengthError> {
    let invalid = || LengthError::InvalidBound {
        field,
        value: value.to_string(),
    };
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(int)
            } else if let Some(float) = number.as_f64() {
                float_to_i64(float).ok_or_else(invalid)
            } else {
                Err(invalid())
            }
        }
        Value::Bool(flag) => Ok(i64::from(*flag)),
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| invalid()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}

// i64::MAX as f64 rounds up to 2^63, so the upper check is exclusive.
fn float_to_i64(float: f64) -> Option<i64> {
    let truncated = float.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_keys_use_defaults() {
        let bounds = WordBounds::from_args(&json!({"text": "x"}), WordBounds::default())
            .expect("defaults");
        assert_eq!(bounds, WordBounds::new(260, 340));
    }

    #[test]
    fn numeric_forms_coerce() {
        assert_eq!(coerce_bound("min_words", &json!(300)), Ok(300));
        assert_eq!(coerce_bound("min_words", &json!(300.9)), Ok(300));
        assert_eq!(coerce_bound("min_words", &json!(-2.5)), Ok(-2));
        assert_eq!(coerce_bound("min_words", &json!(" 280 ")), Ok(280));
        assert_eq!(coerce_bound("min_words", &json!("+15")), Ok(15));
        assert_eq!(coerce_bound("min_words", &json!(true)), Ok(1));
    }

    #[test]
    fn uncoercible_values_are_errors() {
        for value in [json!("abc"), json!("3.5"), json!(null), json!([1]), json!({})] {
            let err = coerce_bound("max_words", &value).unwrap_err();
            assert!(matches!(
                err,
                LengthError::InvalidBound {
                    field: "max_words",
                    ..
                }
            ));
        }
    }

    #[test]
    fn out_of_range_number_is_an_error() {
        assert!(coerce_bound("max_words", &json!(u64::MAX)).is_err());
        assert!(coerce_bound("max_words", &json!(1e300)).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = WordBounds::new(2, 4);
        assert!(!bounds.contains(1));
        assert!(bounds.contains(2));
        assert!(bounds.contains(4));
        assert!(!bounds.contains(5));
    }
}
