//! Configuration for fact extraction.
//!
//! [`FactsConfig`] controls which event tags count as cards or in-match
//! penalties, which character marks a `full_time_score` as a result, and an
//! optional size ceiling for serialized records. The defaults reproduce the
//! behavior the report agent was built against, so most callers never need to
//! construct one by hand.
//!
//! ```rust
//! use facts::FactsConfig;
//!
//! let config = FactsConfig::default();
//! assert_eq!(config.score_separator, ':');
//! assert!(config.card_event_types.iter().any(|t| t == "red_card"));
//! config.validate().expect("defaults are valid");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for [`extract_with_config`](crate::extract_with_config).
///
/// Serializable so it can be embedded in a host's YAML or JSON config:
///
/// ```json
/// {
///   "version": 1,
///   "score_separator": ":",
///   "card_event_types": ["yellow_card", "red_card"],
///   "penalty_event_types": ["penalty_scored", "penalty_missed"],
///   "max_payload_bytes": 1048576
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FactsConfig {
    /// Configuration version. Version 0 is reserved and rejected.
    ///
    /// Default: `1`
    pub version: u32,

    /// A `full_time_score` string is accepted as a result when it contains this
    /// character. No numeric check is applied to either side.
    ///
    /// Default: `':'`
    pub score_separator: char,

    /// Event `type` tags that set `has_cards`.
    ///
    /// Default: `["yellow_card", "red_card"]`
    pub card_event_types: Vec<String>,

    /// Event `type` tags that set `has_penalties_in_match`.
    ///
    /// Default: `["penalty_scored", "penalty_missed"]`
    pub penalty_event_types: Vec<String>,

    /// Maximum byte length of a serialized record, checked before parsing.
    ///
    /// Structured records are not measured.
    ///
    /// Default: `None` (unlimited)
    pub max_payload_bytes: Option<usize>,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            version: 1,
            score_separator: ':',
            card_event_types: vec!["yellow_card".into(), "red_card".into()],
            penalty_event_types: vec!["penalty_scored".into(), "penalty_missed".into()],
            max_payload_bytes: None,
        }
    }
}

/// Reasons a [`FactsConfig`] is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config version must be >= 1")]
    InvalidVersion,
    #[error("score separator must not be whitespace")]
    WhitespaceSeparator,
    #[error("{list} contains an empty event type")]
    EmptyEventType { list: &'static str },
    #[error("max_payload_bytes must be greater than zero")]
    ZeroPayloadLimit,
}

impl FactsConfig {
    /// Checks the configuration for values extraction cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::InvalidVersion);
        }
        if self.score_separator.is_whitespace() {
            return Err(ConfigError::WhitespaceSeparator);
        }
        if self.card_event_types.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::EmptyEventType {
                list: "card_event_types",
            });
        }
        if self.penalty_event_types.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::EmptyEventType {
                list: "penalty_event_types",
            });
        }
        if self.max_payload_bytes == Some(0) {
            return Err(ConfigError::ZeroPayloadLimit);
        }
        Ok(())
    }

    pub(crate) fn is_card(&self, event_type: &str) -> bool {
        self.card_event_types.iter().any(|t| t == event_type)
    }

    pub(crate) fn is_penalty(&self, event_type: &str) -> bool {
        self.penalty_event_types.iter().any(|t| t == event_type)
    }
}
