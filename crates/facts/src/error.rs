//! Error types produced by the facts crate.
//!
//! Errors fall into two groups:
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`MissingInput`](FactsError::MissingInput) | Input shape | Neither a record object nor a serialized record was supplied |
//! | [`InvalidJson`](FactsError::InvalidJson) | Input shape | The serialized record failed to parse |
//! | [`NotAnObject`](FactsError::NotAnObject) | Input shape | The serialized record parsed, but not to an object |
//! | [`PayloadTooLarge`](FactsError::PayloadTooLarge) | Input shape | Serialized record exceeds the configured limit |
//! | [`Validation`](FactsError::Validation) | Field rules | One or more required facts are missing or malformed |
//! | [`InvalidConfig`](FactsError::InvalidConfig) | Configuration | The [`FactsConfig`](crate::FactsConfig) failed validation |
//!
//! Input-shape errors stop extraction before any field rule runs. Field-rule
//! violations are never short-circuited: every broken rule is collected into a
//! single [`Violations`] list and rendered as one combined message.
//!
//! ```rust
//! use facts::{FactsError, Violation, Violations};
//!
//! let mut violations = Violations::default();
//! violations.push(Violation::MissingDate);
//! violations.push(Violation::MissingAwayTeamName);
//!
//! let err = FactsError::Validation(violations);
//! assert_eq!(
//!     err.to_string(),
//!     "There is an error in the provided JSON. Missing or empty 'date'; \
//!      Missing 'away_team.name'. I cannot proceed without it."
//! );
//! ```
use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;

const FAILURE_PREFIX: &str = "There is an error in the provided JSON. ";
const FAILURE_SUFFIX: &str = ". I cannot proceed without it.";

/// A single field rule that a match record broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Violation {
    /// `date` is absent, not a string, or blank.
    MissingDate,
    /// `home_team.name` is absent, not a string, or blank.
    MissingHomeTeamName,
    /// `away_team.name` is absent, not a string, or blank.
    MissingAwayTeamName,
    /// Neither a separator-bearing `full_time_score` nor two integer team scores.
    MissingResult,
    /// `events` is present but is not an array.
    EventsNotArray,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Violation::MissingDate => "Missing or empty 'date'",
            Violation::MissingHomeTeamName => "Missing 'home_team.name'",
            Violation::MissingAwayTeamName => "Missing 'away_team.name'",
            Violation::MissingResult => {
                "Provide either 'full_time_score' as 'X:Y' or integer 'home_team.score' and 'away_team.score'"
            }
            Violation::EventsNotArray => "'events' must be an array when present",
        };
        f.write_str(text)
    }
}

/// Every rule a record broke, in evaluation order.
///
/// Displays as the single combined message surfaced to the end user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.0.contains(&violation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FAILURE_PREFIX)?;
        for (idx, violation) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        f.write_str(FAILURE_SUFFIX)
    }
}

/// Errors that can occur while extracting canonical facts.
///
/// The display strings are the exact messages handed back to the agent, which
/// relays them verbatim to the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FactsError {
    /// No usable record was supplied.
    #[error("Provide match_json (object) or match_json_text (JSON string).")]
    MissingInput,

    /// The serialized record is not valid JSON. Carries the parser detail.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The serialized record is valid JSON but not an object.
    #[error("Invalid JSON: expected a match record object, found {0}")]
    NotAnObject(&'static str),

    /// The serialized record exceeds `FactsConfig::max_payload_bytes`.
    #[error("Invalid JSON: serialized record of {size} bytes exceeds limit of {limit}")]
    PayloadTooLarge { size: usize, limit: usize },

    /// One or more field rules failed.
    #[error("{0}")]
    Validation(Violations),

    #[error("invalid facts configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl FactsError {
    /// The collected violations, when this is a field-rule failure.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            FactsError::Validation(violations) => Some(violations),
            _ => None,
        }
    }
}
