//! Core data model for the facts crate.
//!
//! ```text
//! RecordInput
//! ├── Structured(Map<String, Value>)
//! └── Serialized(String)
//!
//!         ↓ RecordInput::parse()
//!
//! RawMatchRecord            every field Option<Value>, null == absent
//!
//!         ↓ normalize_record()
//!
//! CanonicalFacts
//! ├── date: String
//! ├── home_team / away_team: TeamFacts { name, score }
//! ├── full_time_score: String (supplied or synthesized)
//! ├── competition / round / venue / city / half_time_score: Option<String>
//! ├── penalty_shootout: Option<Value>
//! ├── events: Vec<Value>
//! └── has_cards / has_penalties_in_match / has_penalty_shootout: bool
//! ```
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FactsError;

/// A match record exactly as the caller sent it.
///
/// Every field is kept as an untyped JSON value so that a wrongly typed field
/// becomes a rule violation during validation instead of a deserialization
/// failure. JSON `null` deserializes to `None`; unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawMatchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<Value>,
    /// Expected shape: `{"name": string, "score": integer}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team: Option<Value>,
    /// Expected shape: `{"name": string, "score": integer}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_time_score: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_time_score: Option<Value>,
    /// Opaque; only its presence matters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_shootout: Option<Value>,
    /// Expected shape: array of `{"type": string, ...}` objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Value>,
}

impl RawMatchRecord {
    /// Interprets a parsed JSON value as a match record.
    ///
    /// Only objects are accepted; any other JSON kind is an input-shape error.
    pub fn from_value(value: Value) -> Result<Self, FactsError> {
        if !value.is_object() {
            return Err(FactsError::NotAnObject(json_kind(&value)));
        }
        serde_json::from_value(value).map_err(|err| FactsError::InvalidJson(err.to_string()))
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One side of the match after validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamFacts {
    /// Non-blank team name, carried verbatim.
    pub name: String,
    /// Integer score when the record supplied one. `Some(0)` is a real score.
    pub score: Option<i64>,
}

/// The validated, normalized fact set the report is drafted from.
///
/// Only ever built after every field rule passed. Absent optional fields
/// serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalFacts {
    pub date: String,
    pub competition: Option<String>,
    pub round: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub home_team: TeamFacts,
    pub away_team: TeamFacts,
    pub half_time_score: Option<String>,
    /// Supplied string verbatim, or `"{home}:{away}"` from the integer scores.
    pub full_time_score: String,
    pub penalty_shootout: Option<Value>,
    pub events: Vec<Value>,
    pub has_cards: bool,
    pub has_penalties_in_match: bool,
    pub has_penalty_shootout: bool,
}

/// Tagged result of [`extract`](crate::extract).
///
/// Serializes as `{"status":"success","facts":{..}}` or
/// `{"status":"error","error_message":".."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum ValidationOutcome {
    #[serde(rename = "success")]
    Success { facts: Box<CanonicalFacts> },
    #[serde(rename = "error")]
    Failure {
        #[serde(rename = "error_message")]
        message: String,
    },
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success { .. })
    }

    pub fn facts(&self) -> Option<&CanonicalFacts> {
        match self {
            ValidationOutcome::Success { facts } => Some(&**facts),
            ValidationOutcome::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Success { .. } => None,
            ValidationOutcome::Failure { message } => Some(message.as_str()),
        }
    }
}

impl From<Result<CanonicalFacts, FactsError>> for ValidationOutcome {
    fn from(result: Result<CanonicalFacts, FactsError>) -> Self {
        match result {
            Ok(facts) => ValidationOutcome::Success {
                facts: Box::new(facts),
            },
            Err(err) => ValidationOutcome::Failure {
                message: err.to_string(),
            },
        }
    }
}
