//! Tests pinning the serialized shape of operation results.

use hangman_games::{ErrorResponse, SessionRegistry, SessionStatus};
use serde_json::Value;

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

#[test]
fn test_start_game_json_fields() {
    let registry = SessionRegistry::new();
    let json = to_json(&registry.start_with_word("s", "Alice", "CAT"));

    assert_eq!(json["status"], "success");
    assert_eq!(json["word_length"], 3);
    assert_eq!(json["display_word"], "_ _ _");
    assert_eq!(json["drawing_stage"], 0);
    assert_eq!(json["guesses_remaining"], 9);
    assert_eq!(json["session_id"], "s");
    assert!(json["drawing"].as_str().unwrap().contains("====="));
}

#[test]
fn test_guess_json_omits_won_while_in_progress() {
    let registry = SessionRegistry::new();
    registry.start_with_word("s", "Alice", "CAT");

    let json = to_json(&registry.guess("s", "c").unwrap());
    assert_eq!(json["status"], "success");
    assert_eq!(json["letter"], "C");
    assert_eq!(json["correct"], true);
    assert_eq!(json["game_over"], false);
    assert!(json.get("won").is_none());
    assert_eq!(json["guesses_made"], serde_json::json!(["C"]));
}

#[test]
fn test_guess_json_reports_won_when_over() {
    let registry = SessionRegistry::new();
    registry.start_with_word("s", "Alice", "A");

    let json = to_json(&registry.guess("s", "a").unwrap());
    assert_eq!(json["game_over"], true);
    assert_eq!(json["won"], true);
    assert!(json["message"].as_str().unwrap().contains("'A'"));
}

#[test]
fn test_status_json_statuses() {
    let registry = SessionRegistry::new();

    let json = to_json(&registry.status("missing"));
    assert_eq!(json["status"], "no_game");
    assert!(json.get("display_word").is_none());

    registry.start_with_word("s", "Alice", "CAT");
    let json = to_json(&registry.status("s"));
    assert_eq!(json["status"], "active");
    assert_eq!(json["player_name"], "Alice");

    assert_eq!(
        to_json(&SessionStatus::NoActiveGame),
        Value::String("no_active_game".to_string())
    );
    assert_eq!(
        to_json(&SessionStatus::Finished),
        Value::String("finished".to_string())
    );
}

#[test]
fn test_error_response_shape() {
    let json = to_json(&ErrorResponse::new("No game session found."));
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "No game session found.");
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[test]
fn test_list_sessions_json_fields() {
    let registry = SessionRegistry::new();
    registry.start_with_word("s", "Alice", "CAT");

    let json = to_json(&registry.list_sessions());
    assert_eq!(json["status"], "success");
    assert_eq!(json["total_sessions"], 1);
    let entry = &json["sessions"][0];
    assert_eq!(entry["session_id"], "s");
    assert_eq!(entry["player_name"], "Alice");
    assert_eq!(entry["active"], true);
    assert_eq!(entry["word_length"], 3);
    assert_eq!(entry["guesses_made"], 0);
    assert_eq!(entry["game_over"], false);
}
