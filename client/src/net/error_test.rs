use super::*;
use serde_json::json;

#[test]
fn detail_wins_over_other_keys() {
    let body = json!({ "message": "second", "detail": "bad credentials", "error": "third" });
    assert_eq!(message_from_body(&body), Some("bad credentials".to_owned()));
}

#[test]
fn message_then_error_keys_are_checked() {
    assert_eq!(message_from_body(&json!({ "message": "m" })), Some("m".to_owned()));
    assert_eq!(
        message_from_body(&json!({ "error": "Invalid credentials" })),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn field_validation_errors_are_used_last() {
    let body = json!({ "username": ["A user with that username already exists."] });
    assert_eq!(
        message_from_body(&body),
        Some("A user with that username already exists.".to_owned())
    );
}

#[test]
fn empty_or_non_object_bodies_have_no_message() {
    assert_eq!(message_from_body(&json!({})), None);
    assert_eq!(message_from_body(&json!({ "detail": "  " })), None);
    assert_eq!(message_from_body(&json!(["x"])), None);
    assert_eq!(message_from_body(&json!(null)), None);
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 401, message: Some("bad credentials".to_owned()) };
    assert_eq!(err.user_message("Invalid credentials"), "bad credentials");
}

#[test]
fn user_message_falls_back() {
    let fallback = "Registration failed";
    assert_eq!(ApiError::Status { status: 500, message: None }.user_message(fallback), fallback);
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Unavailable.user_message(fallback), fallback);
}

#[test]
fn display_describes_failure() {
    assert_eq!(
        ApiError::Status { status: 404, message: None }.to_string(),
        "request failed with status 404"
    );
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn display_is_diagnostic_and_user_message_is_shown() {
    let rejected = ApiError::Status { status: 401, message: Some("bad credentials".into()) };
    assert_eq!(rejected.to_string(), "request failed with status 401");
    assert_eq!(rejected.user_message("Invalid credentials"), "bad credentials");

    let offline = ApiError::Network("connection refused".into());
    assert_eq!(offline.to_string(), "network error: connection refused");
    assert_eq!(offline.user_message("Invalid credentials"), "Invalid credentials");
}
