//! Field rules and normalization from [`RawMatchRecord`] to [`CanonicalFacts`].
//!
//! Every rule is evaluated even after one fails, so a caller fixing a record
//! sees all of its problems at once.
use serde_json::Value;

use crate::config::FactsConfig;
use crate::error::{FactsError, Violation, Violations};
use crate::events::summarize_events;
use crate::types::{CanonicalFacts, RawMatchRecord, TeamFacts};

/// Validates a raw record and builds its canonical facts.
///
/// Returns [`FactsError::Validation`] carrying every broken rule when any
/// rule fails; partial facts are never produced.
pub fn normalize_record(
    raw: RawMatchRecord,
    cfg: &FactsConfig,
) -> Result<CanonicalFacts, FactsError> {
    let RawMatchRecord {
        date,
        competition,
        round,
        venue,
        city,
        home_team,
        away_team,
        half_time_score,
        full_time_score,
        penalty_shootout,
        events,
    } = raw;

    let mut violations = Violations::default();

    let date = non_blank_string(date);
    if date.is_none() {
        violations.push(Violation::MissingDate);
    }

    let home = RawTeam::read(home_team);
    let away = RawTeam::read(away_team);
    if home.name.is_none() {
        violations.push(Violation::MissingHomeTeamName);
    }
    if away.name.is_none() {
        violations.push(Violation::MissingAwayTeamName);
    }

    let full_time_score = resolve_result(full_time_score, home.score, away.score, cfg);
    if full_time_score.is_none() {
        violations.push(Violation::MissingResult);
    }

    let events = match events {
        None => Some(Vec::new()),
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            violations.push(Violation::EventsNotArray);
            None
        }
    };

    let (Some(date), Some(home_name), Some(away_name), Some(full_time_score), Some(events)) =
        (date, home.name, away.name, full_time_score, events)
    else {
        return Err(FactsError::Validation(violations));
    };

    let summary = summarize_events(&events, cfg);

    Ok(CanonicalFacts {
        date,
        competition: string_field(competition),
        round: string_field(round),
        venue: string_field(venue),
        city: string_field(city),
        home_team: TeamFacts {
            name: home_name,
            score: home.score,
        },
        away_team: TeamFacts {
            name: away_name,
            score: away.score,
        },
        half_time_score: string_field(half_time_score),
        full_time_score,
        has_penalty_shootout: penalty_shootout.is_some(),
        penalty_shootout,
        events,
        has_cards: summary.has_cards(),
        has_penalties_in_match: summary.has_penalties(),
    })
}

/// The fields of one team object that the rules look at.
///
/// A missing or non-object team yields all-`None`, which fails every check on
/// that team.
#[derive(Debug, Default)]
struct RawTeam {
    name: Option<String>,
    score: Option<i64>,
}

impl RawTeam {
    fn read(team: Option<Value>) -> Self {
        let Some(Value::Object(mut fields)) = team else {
            return RawTeam::default();
        };
        RawTeam {
            name: non_blank_string(fields.remove("name")),
            score: fields.get("score").and_then(Value::as_i64),
        }
    }
}

/// Picks the full-time score: a separator-bearing string wins, otherwise the
/// integer pair is rendered as `"{home}:{away}"`.
fn resolve_result(
    full_time_score: Option<Value>,
    home_score: Option<i64>,
    away_score: Option<i64>,
    cfg: &FactsConfig,
) -> Option<String> {
    match full_time_score {
        Some(Value::String(score)) if score.contains(cfg.score_separator) => Some(score),
        _ => match (home_score, away_score) {
            (Some(home), Some(away)) => Some(format!("{home}:{away}")),
            _ => None,
        },
    }
}

/// A string value that is non-empty after trimming, kept verbatim.
fn non_blank_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
