//! The single exit point for user-visible text.
//!
//! The agent never answers directly; it hands its final text (or a fact
//! extraction failure message) to [`finalize`], and whatever comes back is what
//! the end user sees.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Argument key for the final text.
pub const FINAL_TEXT_KEY: &str = "text";

/// The end-user-visible answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalOutput {
    pub text: String,
}

/// Wraps `text` unchanged. Absent text becomes the empty string.
pub fn finalize(text: Option<String>) -> FinalOutput {
    FinalOutput {
        text: text.unwrap_or_default(),
    }
}

/// Finalizes a `return_final` argument object: `{"text": "..."}`.
///
/// Strings pass through verbatim, an absent or `null` text is empty, and any
/// other JSON value is echoed as its JSON text.
pub fn finalize_args(args: &Value) -> FinalOutput {
    let text = match args.get(FINAL_TEXT_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    };
    finalize(text)
}
