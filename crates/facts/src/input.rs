//! Input resolution: turning a tool payload into a [`RawMatchRecord`].
//!
//! A caller hands over a match record in one of two forms, either the record
//! object itself or its JSON text. Resolution and parsing both happen before any
//! field rule is looked at, and a failure here is terminal.
//!
//! ```rust
//! use facts::{FactsConfig, RecordInput};
//! use serde_json::json;
//!
//! let payload = json!({ "match_json_text": "{\"date\": \"2024-05-10\"}" });
//! let input = RecordInput::from_payload(&payload).unwrap();
//! assert_eq!(input.kind(), "serialized");
//!
//! let raw = input.parse(&FactsConfig::default()).unwrap();
//! assert_eq!(raw.date, Some(json!("2024-05-10")));
//! ```
use serde_json::{Map, Value};

use crate::config::FactsConfig;
use crate::error::FactsError;
use crate::types::RawMatchRecord;

/// Payload key carrying the record as a JSON object.
pub const STRUCTURED_KEY: &str = "match_json";
/// Payload key carrying the record as JSON text.
pub const SERIALIZED_KEY: &str = "match_json_text";

/// A match record as supplied by the caller, before parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordInput {
    /// The record object itself.
    Structured(Map<String, Value>),
    /// The record's serialized JSON text.
    Serialized(String),
}

impl RecordInput {
    /// Resolves the record from a tool payload.
    ///
    /// `match_json` wins when it holds an object. Otherwise `match_json_text`
    /// is used when it holds a non-blank string. Anything else is
    /// [`FactsError::MissingInput`].
    pub fn from_payload(payload: &Value) -> Result<Self, FactsError> {
        if let Some(Value::Object(map)) = payload.get(STRUCTURED_KEY) {
            return Ok(RecordInput::Structured(map.clone()));
        }
        match payload.get(SERIALIZED_KEY) {
            Some(Value::String(text)) if !text.trim().is_empty() => {
                Ok(RecordInput::Serialized(text.clone()))
            }
            _ => Err(FactsError::MissingInput),
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordInput::Structured(_) => "structured",
            RecordInput::Serialized(_) => "serialized",
        }
    }

    /// Parses the input into a raw record without applying any field rule.
    pub fn parse(self, cfg: &FactsConfig) -> Result<RawMatchRecord, FactsError> {
        let value = match self {
            RecordInput::Structured(map) => Value::Object(map),
            RecordInput::Serialized(text) => {
                if text.trim().is_empty() {
                    return Err(FactsError::MissingInput);
                }
                if let Some(limit) = cfg.max_payload_bytes {
                    if text.len() > limit {
                        return Err(FactsError::PayloadTooLarge {
                            size: text.len(),
                            limit,
                        });
                    }
                }
                serde_json::from_str::<Value>(&text)
                    .map_err(|err| FactsError::InvalidJson(err.to_string()))?
            }
        };
        RawMatchRecord::from_value(value)
    }
}

impl From<Map<String, Value>> for RecordInput {
    fn from(map: Map<String, Value>) -> Self {
        RecordInput::Structured(map)
    }
}

impl From<String> for RecordInput {
    fn from(text: String) -> Self {
        RecordInput::Serialized(text)
    }
}

impl From<&str> for RecordInput {
    fn from(text: &str) -> Self {
        RecordInput::Serialized(text.to_owned())
    }
}
