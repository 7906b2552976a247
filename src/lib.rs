//! Workspace umbrella crate for the match report gate.
//!
//! An agent drafting a football match report is fenced in by three tools:
//! a fact extractor that refuses to let it write from an invalid record, a
//! length classifier that tells it whether a draft fits the word range, and an
//! output gate that is the only way text reaches the user. This crate stitches
//! the `facts` and `length` stage crates together with the output gate, a YAML
//! configuration layer and a name-based tool dispatcher.
//!
//! ```
//! use match_report_gate::{dispatch, GateConfig};
//! use serde_json::json;
//!
//! let cfg = GateConfig::default();
//! let facts = dispatch(
//!     "get_match_data",
//!     &json!({"match_json": {
//!         "date": "2024-05-01",
//!         "home_team": {"name": "Sparta", "score": 2},
//!         "away_team": {"name": "Slavia", "score": 1}
//!     }}),
//!     &cfg,
//! )
//! .unwrap();
//! assert_eq!(facts["status"], "success");
//! assert_eq!(facts["facts"]["full_time_score"], "2:1");
//!
//! let out = dispatch("return_final", &json!({"text": "ahoj"}), &cfg).unwrap();
//! assert_eq!(out, json!({"text": "ahoj"}));
//! ```

mod config;
mod output;
mod tools;

pub use facts::{
    extract, extract_with_config, summarize_events, try_extract, CanonicalFacts, EventSummary,
    FactsConfig, FactsError, RawMatchRecord, RecordInput, TeamFacts, ValidationOutcome, Violation,
    Violations,
};
pub use length::{
    classify, classify_args, count_words, tokenize_words, try_classify, LengthConfig, LengthError,
    LengthVerdict, Word, WordBounds, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS,
};

pub use crate::config::{ConfigLoadError, GateConfig};
pub use crate::output::{finalize, finalize_args, FinalOutput, FINAL_TEXT_KEY};
pub use crate::tools::{
    definitions, dispatch, dispatch_raw, get_match_data, return_final, word_count,
    FunctionDefinition, ToolDefinition, ToolError, ToolName,
};
