//! Event scanning for the derived discipline and penalty flags.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FactsConfig;

/// Counts of the events that drive the summary flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Events tagged with a card type.
    pub cards: usize,
    /// Events tagged with an in-match penalty type.
    pub penalties: usize,
    /// Events whose tag is missing, not a string, or unrecognized.
    pub other: usize,
}

impl EventSummary {
    pub fn has_cards(&self) -> bool {
        self.cards > 0
    }

    pub fn has_penalties(&self) -> bool {
        self.penalties > 0
    }
}

/// The `type` tag of an event, if it has a string one.
pub fn event_type(event: &Value) -> Option<&str> {
    event.get("type").and_then(Value::as_str)
}

/// Tallies events by category. Untagged or non-object events land in `other`.
pub fn summarize_events(events: &[Value], cfg: &FactsConfig) -> EventSummary {
    events
        .iter()
        .fold(EventSummary::default(), |mut summary, event| {
            let (card, penalty) = match event_type(event) {
                Some(tag) => (cfg.is_card(tag), cfg.is_penalty(tag)),
                None => (false, false),
            };
            // A tag listed in both categories counts toward both.
            summary.cards += usize::from(card);
            summary.penalties += usize::from(penalty);
            summary.other += usize::from(!card && !penalty);
            summary
        })
}
