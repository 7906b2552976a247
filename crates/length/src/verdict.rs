use serde::{Deserialize, Serialize};

use crate::bounds::{count_as_i64, WordBounds};
use crate::error::LengthError;

/// Classification of a text's word count against a [`WordBounds`] range.
///
/// Serializes in the shape the drafting agent reads:
///
/// ```json
/// {"status": "too_short", "count": 212, "min": 260, "max": 340}
/// {"status": "error", "error_message": "empty text"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LengthVerdict {
    TooShort { count: usize, min: i64, max: i64 },
    TooLong { count: usize, min: i64, max: i64 },
    Ok { count: usize, min: i64, max: i64 },
    /// Malformed input: no usable text, or bounds that are not integers.
    Error {
        #[serde(rename = "error_message")]
        message: String,
    },
}

impl LengthVerdict {
    /// Places `count` relative to `bounds`. Boundaries count as in range.
    pub fn from_count(count: usize, bounds: &WordBounds) -> Self {
        let WordBounds { min, max } = *bounds;
        let as_i64 = count_as_i64(count);
        if as_i64 < min {
            LengthVerdict::TooShort { count, min, max }
        } else if as_i64 > max {
            LengthVerdict::TooLong { count, min, max }
        } else {
            LengthVerdict::Ok { count, min, max }
        }
    }

    /// Wire tag of the variant.
    pub fn status(&self) -> &'static str {
        match self {
            LengthVerdict::TooShort { .. } => "too_short",
            LengthVerdict::TooLong { .. } => "too_long",
            LengthVerdict::Ok { .. } => "ok",
            LengthVerdict::Error { .. } => "error",
        }
    }

    /// True only for [`LengthVerdict::Ok`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, LengthVerdict::Ok { .. })
    }

    /// True for too short and too long: the text should be revised.
    pub fn needs_revision(&self) -> bool {
        matches!(
            self,
            LengthVerdict::TooShort { .. } | LengthVerdict::TooLong { .. }
        )
    }

    pub fn count(&self) -> Option<usize> {
        match self {
            LengthVerdict::TooShort { count, .. }
            | LengthVerdict::TooLong { count, .. }
            | LengthVerdict::Ok { count, .. } => Some(*count),
            LengthVerdict::Error { .. } => None,
        }
    }
}

impl From<LengthError> for LengthVerdict {
    fn from(err: LengthError) -> Self {
        LengthVerdict::Error {
            message: err.to_string(),
        }
    }
}

impl From<Result<LengthVerdict, LengthError>> for LengthVerdict {
    fn from(result: Result<LengthVerdict, LengthError>) -> Self {
        result.unwrap_or_else(LengthVerdict::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_boundaries() {
        let bounds = WordBounds::default();
        assert_eq!(LengthVerdict::from_count(259, &bounds).status(), "too_short");
        assert_eq!(LengthVerdict::from_count(260, &bounds).status(), "ok");
        assert_eq!(LengthVerdict::from_count(340, &bounds).status(), "ok");
        assert_eq!(LengthVerdict::from_count(341, &bounds).status(), "too_long");
    }

    #[test]
    fn inverted_bounds_never_accept() {
        let bounds = WordBounds::new(10, 5);
        for count in 0..20 {
            assert!(!LengthVerdict::from_count(count, &bounds).is_accepted());
        }
    }

    #[test]
    fn serializes_tool_shape() {
        let verdict = LengthVerdict::from_count(300, &WordBounds::default());
        assert_eq!(
            serde_json::to_value(&verdict).expect("serializes"),
            json!({"status": "ok", "count": 300, "min": 260, "max": 340})
        );

        let error = LengthVerdict::from(LengthError::EmptyText);
        assert_eq!(
            serde_json::to_value(&error).expect("serializes"),
            json!({"status": "error", "error_message": "empty text"})
        );
        assert_eq!(error.count(), None);
        assert!(!error.needs_revision());
    }

    #[test]
    fn deserializes_from_wire() {
        let verdict: LengthVerdict =
            serde_json::from_value(json!({"status": "too_long", "count": 400, "min": 260, "max": 340}))
                .expect("parses");
        assert!(verdict.needs_revision());
        assert_eq!(verdict.count(), Some(400));
    }
}
