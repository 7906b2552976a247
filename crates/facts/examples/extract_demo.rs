use facts::{extract, RecordInput};

const RECORD: &str = r#"{
    "date": "2024-05-10",
    "competition": "Fortuna liga",
    "round": "30. kolo",
    "venue": "epet ARENA",
    "city": "Praha",
    "home_team": {"name": "Sparta", "score": 2},
    "away_team": {"name": "Slavia", "score": 1},
    "half_time_score": "1:0",
    "events": [
        {"type": "goal", "minute": 17, "team": "home"},
        {"type": "yellow_card", "minute": 44, "team": "away"},
        {"type": "penalty_scored", "minute": 63, "team": "away"},
        {"type": "goal", "minute": 88, "team": "home"}
    ]
}"#;

fn main() {
    let outcome = extract(RecordInput::from(RECORD));
    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to render outcome: {err}"),
    }

    let broken = extract(RecordInput::from(r#"{"home_team": {"name": "Sparta"}}"#));
    if let Some(message) = broken.message() {
        println!("{message}");
    }
}
