//! Word-count gate for drafted reports.
//!
//! Counts the words in a text and says whether the count sits inside an
//! acceptance range. The drafting agent calls this after every revision and
//! keeps revising until it gets [`LengthVerdict::Ok`].
//!
//! ## What counts as a word
//!
//! A maximal run of word-class grapheme clusters: Unicode letters, Unicode
//! numbers and `_`. Punctuation, quotes and whitespace only separate words.
//! Segmentation is by extended grapheme cluster, so Czech diacritics count the
//! same whether they arrive precomposed or as combining marks.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. The same text and bounds give the
//! same verdict on every call.
//!
//! ```rust
//! use length::{classify, LengthVerdict, WordBounds};
//!
//! let verdict = classify("Sparta porazila Slavii 2:1.", &WordBounds::new(3, 10));
//! assert_eq!(verdict, LengthVerdict::Ok { count: 5, min: 3, max: 10 });
//! ```

mod bounds;
mod config;
mod error;
mod token;
mod verdict;

use serde_json::Value;
use tracing::debug;

pub use crate::bounds::{
    coerce_bound, WordBounds, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, MAX_WORDS_KEY, MIN_WORDS_KEY,
};
pub use crate::config::{ConfigError, LengthConfig};
pub use crate::error::LengthError;
pub use crate::token::{count_words, is_word_char, tokenize_words, Word};
pub use crate::verdict::LengthVerdict;

/// Argument key for the text to classify.
pub const TEXT_KEY: &str = "text";

/// Classifies `text` against `bounds`. Errors become [`LengthVerdict::Error`].
pub fn classify(text: &str, bounds: &WordBounds) -> LengthVerdict {
    try_classify(text, bounds).into()
}

/// Classifies `text` against `bounds`.
///
/// Whitespace-only text is [`LengthError::EmptyText`]; otherwise the result is
/// one of the three range verdicts.
pub fn try_classify(text: &str, bounds: &WordBounds) -> Result<LengthVerdict, LengthError> {
    if text.trim().is_empty() {
        return Err(LengthError::EmptyText);
    }
    let count = count_words(text);
    let verdict = LengthVerdict::from_count(count, bounds);
    debug!(
        status = verdict.status(),
        count,
        min = bounds.min,
        max = bounds.max,
        "classify_verdict"
    );
    Ok(verdict)
}

/// Classifies a `word_count` tool argument object:
/// `{"text": "...", "min_words": 260, "max_words": 340}`.
///
/// The text is checked before the bounds; absent bounds fall back to
/// `defaults`.
pub fn classify_args(args: &Value, defaults: &WordBounds) -> LengthVerdict {
    let text = match args.get(TEXT_KEY).and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => text,
        _ => return LengthError::EmptyText.into(),
    };
    match WordBounds::from_args(args, *defaults) {
        Ok(bounds) => classify(text, &bounds),
        Err(err) => err.into(),
    }
}
