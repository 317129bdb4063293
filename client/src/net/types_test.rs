use super::*;

#[test]
fn login_response_tolerates_missing_fields() {
    let parsed: LoginResponse = serde_json::from_str("{}").expect("empty object decodes");
    assert_eq!(parsed, LoginResponse::default());

    let parsed: LoginResponse =
        serde_json::from_str(r#"{"token":"abc","username":"maria"}"#).expect("full body decodes");
    assert_eq!(parsed.token.as_deref(), Some("abc"));
    assert_eq!(parsed.username.as_deref(), Some("maria"));
}

#[test]
fn feedback_decodes_backend_shape() {
    let parsed: Vec<Feedback> = serde_json::from_str(
        r#"[{"id":3,"message":"Great store","created_at":"2025-03-01T08:15:00Z"}]"#,
    )
    .expect("feedback list decodes");
    assert_eq!(parsed[0].id, Some(3));
    assert_eq!(parsed[0].username, None);
    assert_eq!(parsed[0].created_at.as_deref(), Some("2025-03-01T08:15:00Z"));
}

#[test]
fn feedback_accepts_date_alias() {
    let parsed: Feedback =
        serde_json::from_str(r#"{"message":"hi","date":"2025-03-01T08:15:00Z","extra":true}"#)
            .expect("aliased body decodes");
    assert_eq!(parsed.created_at.as_deref(), Some("2025-03-01T08:15:00Z"));
}

#[test]
fn request_debug_redacts_passwords() {
    let login = LoginRequest { username: "maria".to_owned(), password: "hunter2".to_owned() };
    let register = RegisterRequest {
        username: "maria".to_owned(),
        email: "m@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    assert!(!format!("{login:?}").contains("hunter2"));
    assert!(!format!("{register:?}").contains("hunter2"));
}

#[test]
fn register_request_serializes_expected_fields() {
    let body = serde_json::to_value(RegisterRequest {
        username: "maria".to_owned(),
        email: "m@example.com".to_owned(),
        password: "pw".to_owned(),
    })
    .expect("serializes");
    assert_eq!(body, serde_json::json!({ "username": "maria", "email": "m@example.com", "password": "pw" }));
}
