//! Configuration for the length classifier.
//!
//! [`LengthConfig`] holds the default acceptance range used when a caller does
//! not supply its own bounds.
//!
//! ```rust
//! use length::LengthConfig;
//!
//! let config = LengthConfig::default();
//! assert_eq!(config.min_words, 260);
//! assert_eq!(config.max_words, 340);
//! config.validate().expect("defaults are valid");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::{WordBounds, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};

/// Default acceptance range for classification.
///
/// ```json
/// {
///   "version": 1,
///   "min_words": 260,
///   "max_words": 340
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LengthConfig {
    /// Configuration version. Version 0 is reserved and rejected.
    pub version: u32,
    /// Inclusive lower bound. Default: `260`.
    pub min_words: i64,
    /// Inclusive upper bound. Default: `340`.
    pub max_words: i64,
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            version: 1,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// Reasons a [`LengthConfig`] is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config version must be >= 1")]
    InvalidVersion,
    #[error("{field} must not be negative")]
    NegativeBound { field: &'static str },
    #[error("min_words ({min}) must not exceed max_words ({max})")]
    InvertedBounds { min: i64, max: i64 },
}

impl LengthConfig {
    /// Rejects ranges no text could satisfy.
    ///
    /// Per-call bounds are not held to this; only configured defaults are.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::InvalidVersion);
        }
        if self.min_words < 0 {
            return Err(ConfigError::NegativeBound { field: "min_words" });
        }
        if self.max_words < 0 {
            return Err(ConfigError::NegativeBound { field: "max_words" });
        }
        if self.min_words > self.max_words {
            return Err(ConfigError::InvertedBounds {
                min: self.min_words,
                max: self.max_words,
            });
        }
        Ok(())
    }

    pub fn bounds(&self) -> WordBounds {
        WordBounds::new(self.min_words, self.max_words)
    }
}
