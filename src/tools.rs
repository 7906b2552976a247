//! Tool surface exposed to the drafting agent.
//!
//! Three tools, called in a fixed order by the agent's policy:
//!
//! | Tool | Arguments | Result |
//! |------|-----------|--------|
//! | `get_match_data` | `match_json` (object) or `match_json_text` (string) | [`ValidationOutcome`] |
//! | `word_count` | `text`, optional `min_words` / `max_words` | [`LengthVerdict`] |
//! | `return_final` | `text` | [`FinalOutput`] |
//!
//! Every tool returns a structured value; validation failures and length
//! problems are results, not errors. Only an unknown tool name or argument
//! text that is not JSON makes [`dispatch`] / [`dispatch_raw`] fail.
use std::fmt;
use std::str::FromStr;

use facts::{CanonicalFacts, RecordInput, ValidationOutcome, SERIALIZED_KEY, STRUCTURED_KEY};
use length::{LengthVerdict, MAX_WORDS_KEY, MIN_WORDS_KEY, TEXT_KEY};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GateConfig;
use crate::output::{finalize_args, FinalOutput, FINAL_TEXT_KEY};

/// Errors raised by the dispatcher itself, before any tool runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("malformed arguments for {tool}: {detail}")]
    MalformedArguments { tool: &'static str, detail: String },
    #[error("failed to serialize {tool} result: {detail}")]
    Serialization { tool: &'static str, detail: String },
}

/// The gate's tools, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetMatchData,
    WordCount,
    ReturnFinal,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        ToolName::GetMatchData,
        ToolName::WordCount,
        ToolName::ReturnFinal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetMatchData => "get_match_data",
            ToolName::WordCount => "word_count",
            ToolName::ReturnFinal => "return_final",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }
}

/// A function-calling tool declaration as agent runtimes expect it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    fn function(tool: ToolName, description: &str, parameters: Value) -> Self {
        ToolDefinition {
            tool_type: "function".into(),
            function: FunctionDefinition {
                name: tool.as_str().into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// Declarations for all three tools.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::function(
            ToolName::GetMatchData,
            "Validate a football match record and return its canonical facts. Call this first. \
             If it returns status 'error', pass error_message to return_final and stop.",
            json!({
                "type": "object",
                "properties": {
                    STRUCTURED_KEY: { "type": "object", "description": "The match record as a JSON object" },
                    SERIALIZED_KEY: { "type": "string", "description": "The match record as JSON text" }
                }
            }),
        ),
        ToolDefinition::function(
            ToolName::WordCount,
            "Count the words of a draft and compare the count with the allowed range. \
             Returns status 'ok', 'too_short' or 'too_long' with count, min and max.",
            json!({
                "type": "object",
                "properties": {
                    TEXT_KEY: { "type": "string", "description": "The draft to measure" },
                    MIN_WORDS_KEY: { "type": "integer", "description": "Inclusive lower bound (default 260)" },
                    MAX_WORDS_KEY: { "type": "integer", "description": "Inclusive upper bound (default 340)" }
                },
                "required": [TEXT_KEY]
            }),
        ),
        ToolDefinition::function(
            ToolName::ReturnFinal,
            "Return the final answer to the user. This is the only user-visible output; \
             call it exactly once.",
            json!({
                "type": "object",
                "properties": {
                    FINAL_TEXT_KEY: { "type": "string", "description": "The final article or error message" }
                },
                "required": [FINAL_TEXT_KEY]
            }),
        ),
    ]
}

/// `get_match_data`: resolve, validate and normalize a match record.
pub fn get_match_data(args: &Value, cfg: &GateConfig) -> ValidationOutcome {
    match RecordInput::from_payload(args) {
        Ok(input) => facts::extract_with_config(input, &cfg.facts),
        Err(err) => {
            warn!(error = %err, "get_match_data_unresolved");
            ValidationOutcome::from(Err::<CanonicalFacts, _>(err))
        }
    }
}

/// `word_count`: classify a draft's length against the configured or supplied bounds.
pub fn word_count(args: &Value, cfg: &GateConfig) -> LengthVerdict {
    length::classify_args(args, &cfg.word_bounds())
}

/// `return_final`: echo the final text.
pub fn return_final(args: &Value) -> FinalOutput {
    finalize_args(args)
}

/// Runs a tool by name on already-parsed arguments and returns its JSON result.
pub fn dispatch(name: &str, args: &Value, cfg: &GateConfig) -> Result<Value, ToolError> {
    let tool: ToolName = name.parse()?;
    debug!(tool = %tool, "tool_dispatch");
    let result = match tool {
        ToolName::GetMatchData => serde_json::to_value(get_match_data(args, cfg)),
        ToolName::WordCount => serde_json::to_value(word_count(args, cfg)),
        ToolName::ReturnFinal => serde_json::to_value(return_final(args)),
    };
    result.map_err(|err| ToolError::Serialization {
        tool: tool.as_str(),
        detail: err.to_string(),
    })
}

/// Like [`dispatch`], for the serialized argument string an agent runtime
/// delivers with a tool call.
pub fn dispatch_raw(name: &str, args_json: &str, cfg: &GateConfig) -> Result<Value, ToolError> {
    let tool: ToolName = name.parse()?;
    let args: Value = if args_json.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(args_json).map_err(|err| {
            warn!(tool = %tool, error = %err, "tool_arguments_malformed");
            ToolError::MalformedArguments {
                tool: tool.as_str(),
                detail: err.to_string(),
            }
        })?
    };
    dispatch(tool.as_str(), &args, cfg)
}
