use match_report_gate::{
    definitions, dispatch, dispatch_raw, extract, finalize_args, get_match_data, return_final,
    word_count, GateConfig, RecordInput, ToolError, ToolName, ValidationOutcome,
};
use serde_json::{json, Value};

fn derby() -> Value {
    json!({
        "date": "2024-05-10",
        "home_team": {"name": "Sparta", "score": 2},
        "away_team": {"name": "Slavia", "score": 1},
        "events": [{"type": "yellow_card"}]
    })
}

fn words(n: usize) -> String {
    vec!["gól"; n].join(" ")
}

#[test]
fn example_scenario_extracts_expected_facts() {
    let outcome = get_match_data(&json!({ "match_json": derby() }), &GateConfig::default());
    let facts = outcome.facts().expect("derby should validate");

    assert_eq!(facts.full_time_score, "2:1");
    assert!(facts.has_cards);
    assert!(!facts.has_penalties_in_match);
    assert!(!facts.has_penalty_shootout);
}

#[test]
fn supplied_score_string_is_kept_verbatim() {
    let mut record = derby();
    record["full_time_score"] = json!("3 : 3");

    let outcome = extract(RecordInput::from_payload(&json!({ "match_json": record })).unwrap());
    assert_eq!(outcome.facts().unwrap().full_time_score, "3 : 3");
}

#[test]
fn integer_scores_build_score_string() {
    for (h, a) in [(0, 0), (7, 1), (1, 12)] {
        let record = json!({
            "date": "2024-05-10",
            "home_team": {"name": "Bohemians", "score": h},
            "away_team": {"name": "Jablonec", "score": a}
        });
        let outcome = get_match_data(&json!({ "match_json": record }), &GateConfig::default());
        assert_eq!(outcome.facts().unwrap().full_time_score, format!("{h}:{a}"));
    }
}

#[test]
fn missing_or_empty_date_is_reported() {
    let mut without = derby();
    without.as_object_mut().unwrap().remove("date");
    let mut empty = derby();
    empty["date"] = json!("");

    for record in [without, empty] {
        let outcome = get_match_data(&json!({ "match_json": record }), &GateConfig::default());
        let message = outcome.message().expect("date violation");
        assert!(message.contains("Missing or empty 'date'"), "{message}");
    }
}

#[test]
fn every_violation_is_combined_into_one_message() {
    let outcome = get_match_data(
        &json!({"match_json": {"events": "none"}}),
        &GateConfig::default(),
    );
    assert_eq!(
        outcome.message(),
        Some(
            "There is an error in the provided JSON. Missing or empty 'date'; \
             Missing 'home_team.name'; Missing 'away_team.name'; \
             Provide either 'full_time_score' as 'X:Y' or integer 'home_team.score' \
             and 'away_team.score'; 'events' must be an array when present. \
             I cannot proceed without it."
        )
    );
}

#[test]
fn red_card_sets_flag_and_no_events_clears_it() {
    let mut carded = derby();
    carded["events"] = json!([{"type": "goal"}, {"type": "red_card", "minute": 61}]);
    let mut quiet = derby();
    quiet["events"] = json!([]);
    let mut absent = derby();
    absent.as_object_mut().unwrap().remove("events");

    let cfg = GateConfig::default();
    let flag = |record: Value| {
        get_match_data(&json!({ "match_json": record }), &cfg)
            .facts()
            .unwrap()
            .has_cards
    };
    assert!(flag(carded));
    assert!(!flag(quiet));
    assert!(!flag(absent));
}

#[test]
fn serialized_path_matches_structured_path() {
    let cfg = GateConfig::default();
    let structured = get_match_data(&json!({ "match_json": derby() }), &cfg);
    let serialized = get_match_data(
        &json!({ "match_json_text": derby().to_string() }),
        &cfg,
    );
    assert!(structured.is_success());
    assert_eq!(structured, serialized);
}

#[test]
fn structured_record_wins_over_text() {
    let outcome = get_match_data(
        &json!({ "match_json": derby(), "match_json_text": "{not json" }),
        &GateConfig::default(),
    );
    assert!(outcome.is_success());
}

#[test]
fn word_count_boundaries_with_default_bounds() {
    let cfg = GateConfig::default();
    let cases = [
        (259, "too_short"),
        (260, "ok"),
        (340, "ok"),
        (341, "too_long"),
    ];
    for (n, status) in cases {
        let verdict = word_count(&json!({ "text": words(n) }), &cfg);
        let value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(
            value,
            json!({"status": status, "count": n, "min": 260, "max": 340}),
            "{n} words"
        );
    }
}

#[test]
fn word_count_call_bounds_override_config() {
    let verdict = word_count(
        &json!({"text": "Sparta porazila Slavii", "min_words": "1", "max_words": 2.9}),
        &GateConfig::default(),
    );
    assert_eq!(
        serde_json::to_value(&verdict).unwrap(),
        json!({"status": "too_long", "count": 3, "min": 1, "max": 2})
    );
}

#[test]
fn word_count_is_deterministic() {
    let cfg = GateConfig::default();
    let args = json!({ "text": words(300) });
    assert_eq!(word_count(&args, &cfg), word_count(&args, &cfg));
}

#[test]
fn finalize_echoes_text() {
    assert_eq!(
        serde_json::to_value(return_final(&json!({"text": "ahoj"}))).unwrap(),
        json!({"text": "ahoj"})
    );
    assert_eq!(
        serde_json::to_value(finalize_args(&json!({}))).unwrap(),
        json!({"text": ""})
    );
}

#[test]
fn dispatch_matches_direct_calls() {
    let cfg = GateConfig::default();
    let record_args = json!({ "match_json": derby() });
    let count_args = json!({ "text": words(12), "min_words": 10, "max_words": 20 });
    let final_args = json!({ "text": "Konec zápasu." });

    assert_eq!(
        dispatch("get_match_data", &record_args, &cfg).unwrap(),
        serde_json::to_value(get_match_data(&record_args, &cfg)).unwrap()
    );
    assert_eq!(
        dispatch("word_count", &count_args, &cfg).unwrap(),
        serde_json::to_value(word_count(&count_args, &cfg)).unwrap()
    );
    assert_eq!(
        dispatch("return_final", &final_args, &cfg).unwrap(),
        serde_json::to_value(return_final(&final_args)).unwrap()
    );
}

#[test]
fn dispatch_raw_parses_runtime_arguments() {
    let cfg = GateConfig::default();
    let args = json!({ "match_json": derby() }).to_string();
    let value = dispatch_raw("get_match_data", &args, &cfg).unwrap();

    assert_eq!(value["status"], "success");
    assert_eq!(value["facts"]["home_team"]["name"], "Sparta");
    assert_eq!(value["facts"]["venue"], Value::Null);

    let outcome: ValidationOutcome = serde_json::from_value(value).unwrap();
    assert!(outcome.is_success());
}

#[test]
fn unknown_tool_and_malformed_arguments_are_errors() {
    let cfg = GateConfig::default();
    assert_eq!(
        dispatch("publish", &json!({}), &cfg),
        Err(ToolError::UnknownTool("publish".into()))
    );
    assert!(matches!(
        dispatch_raw("return_final", "[\"text\"", &cfg),
        Err(ToolError::MalformedArguments { .. })
    ));
}

#[test]
fn definitions_name_every_dispatchable_tool() {
    for def in definitions() {
        let tool: ToolName = def.function.name.parse().expect("known tool");
        assert_eq!(tool.as_str(), def.function.name);
    }
}
