use thiserror::Error;

/// Errors that can occur while classifying a text's length.
///
/// A text that is too short or too long is not an error; it is a
/// [`LengthVerdict`](crate::LengthVerdict).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LengthError {
    /// Text absent, not a string, or whitespace-only.
    #[error("empty text")]
    EmptyText,
    /// A caller-supplied bound could not be read as an integer.
    #[error("invalid {field}: cannot convert {value} to an integer")]
    InvalidBound { field: &'static str, value: String },
}
