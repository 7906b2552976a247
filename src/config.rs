//! YAML configuration for the report gate.
//!
//! Hosts that embed the gate can keep its settings in a single YAML file and
//! load them at startup. Every section is optional and falls back to the
//! defaults the report agent was built against.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Match report gate configuration
//! version: "1.0"
//! name: "czech-league-reports"
//!
//! facts:
//!   version: 1
//!   score_separator: ":"
//!   card_event_types: ["yellow_card", "red_card"]
//!   penalty_event_types: ["penalty_scored", "penalty_missed"]
//!   max_payload_bytes: 1048576
//!
//! length:
//!   version: 1
//!   min_words: 260
//!   max_words: 340
//! ```

use std::fs;
use std::path::Path;

use facts::FactsConfig;
use length::{LengthConfig, WordBounds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a gate configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("facts config: {0}")]
    Facts(#[from] facts::ConfigError),

    #[error("length config: {0}")]
    Length(#[from] length::ConfigError),
}

/// Top-level configuration for the three gate tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GateConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Fact extraction settings.
    #[serde(default)]
    pub facts: FactsConfig,

    /// Word-count settings. Per-call `min_words` / `max_words` override these.
    #[serde(default)]
    pub length: LengthConfig,
}

impl GateConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration from a string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: GateConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.facts.validate()?;
        self.length.validate()?;

        Ok(())
    }

    /// Default bounds for `word_count` calls.
    pub fn word_bounds(&self) -> WordBounds {
        self.length.bounds()
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            facts: FactsConfig::default(),
            length: LengthConfig::default(),
        }
    }
}
