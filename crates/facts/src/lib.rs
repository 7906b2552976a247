//! Match facts layer
//!
//! This is where a match record enters the report gate. We take whatever the
//! caller sent (a record object or its JSON text), check the handful of facts a
//! report cannot be written without, and hand back a canonical fact set the
//! drafting step can trust.
//!
//! ## What we do here
//!
//! - **Resolve the input** - Record object or serialized JSON text, parsed up
//!   front. Parse failures are terminal; field rules never see them.
//! - **Check required facts** - When (`date`), who (`home_team.name`,
//!   `away_team.name`) and the result (`full_time_score` or both integer scores).
//!   Every broken rule is reported, not just the first.
//! - **Derive flags** - Cards, in-match penalties and a penalty shootout, from the
//!   event list and the shootout field.
//! - **Log everything** - Structured logs via tracing for each extraction.
//!
//! ## Main entry points
//!
//! [`extract`] returns a [`ValidationOutcome`] that is safe to hand straight back
//! to an agent. [`try_extract`] is the typed core returning
//! `Result<CanonicalFacts, FactsError>`.
//!
//! ## Example
//!
//! ```
//! use facts::{extract, RecordInput};
//! use serde_json::json;
//!
//! let record = json!({
//!     "date": "2024-05-10",
//!     "home_team": {"name": "Sparta", "score": 2},
//!     "away_team": {"name": "Slavia", "score": 1},
//!     "events": [{"type": "yellow_card"}]
//! });
//! let input = RecordInput::Structured(record.as_object().unwrap().clone());
//!
//! let outcome = extract(input);
//! let facts = outcome.facts().unwrap();
//! assert_eq!(facts.full_time_score, "2:1");
//! assert!(facts.has_cards);
//! assert!(!facts.has_penalties_in_match);
//! assert!(!facts.has_penalty_shootout);
//! ```
use std::time::Instant;

use tracing::{info, warn, Level};

mod config;
mod error;
mod events;
mod input;
mod normalize;
mod types;

pub use crate::config::{ConfigError, FactsConfig};
pub use crate::error::{FactsError, Violation, Violations};
pub use crate::events::{event_type, summarize_events, EventSummary};
pub use crate::input::{RecordInput, SERIALIZED_KEY, STRUCTURED_KEY};
pub use crate::normalize::normalize_record;
pub use crate::types::{CanonicalFacts, RawMatchRecord, TeamFacts, ValidationOutcome};

/// Extracts canonical facts with the default configuration.
pub fn extract(input: RecordInput) -> ValidationOutcome {
    extract_with_config(input, &FactsConfig::default())
}

/// Extracts canonical facts, folding any error into a
/// [`ValidationOutcome::Failure`].
pub fn extract_with_config(input: RecordInput, cfg: &FactsConfig) -> ValidationOutcome {
    try_extract(input, cfg).into()
}

/// Resolves, parses, validates and normalizes a match record.
pub fn try_extract(input: RecordInput, cfg: &FactsConfig) -> Result<CanonicalFacts, FactsError> {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "facts.extract", input = input.kind());
    let _guard = span.enter();

    match extract_inner(input, cfg) {
        Ok(facts) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                date = %facts.date,
                home_team = %facts.home_team.name,
                away_team = %facts.away_team.name,
                full_time_score = %facts.full_time_score,
                events = facts.events.len(),
                has_cards = facts.has_cards,
                has_penalties_in_match = facts.has_penalties_in_match,
                has_penalty_shootout = facts.has_penalty_shootout,
                elapsed_micros,
                "extract_success"
            );
            Ok(facts)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            let violations = err.violations().map_or(0, Violations::len);
            warn!(error = %err, violations, elapsed_micros, "extract_failure");
            Err(err)
        }
    }
}

fn extract_inner(input: RecordInput, cfg: &FactsConfig) -> Result<CanonicalFacts, FactsError> {
    cfg.validate()?;
    let raw = input.parse(cfg)?;
    normalize_record(raw, cfg)
}
