use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn jwt_with(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

// =============================================================
// decode_username
// =============================================================

#[test]
fn decode_username_reads_payload_claim() {
    let token = jwt_with(&serde_json::json!({ "username": "maria", "exp": 1 }));
    assert_eq!(decode_username(&token), Some("maria".to_owned()));
}

#[test]
fn decode_username_accepts_padded_standard_alphabet() {
    let payload = base64::engine::general_purpose::STANDARD.encode(r#"{"username":"jo"}"#);
    let token = format!("h.{payload}.s");
    assert_eq!(decode_username(&token), Some("jo".to_owned()));
}

#[test]
fn decode_username_ignores_opaque_tokens() {
    assert_eq!(decode_username("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b"), None);
    assert_eq!(decode_username("a.!!!.c"), None);
    assert_eq!(decode_username(""), None);
}

#[test]
fn decode_username_requires_string_claim() {
    let token = jwt_with(&serde_json::json!({ "username": 42 }));
    assert_eq!(decode_username(&token), None);
    let token = jwt_with(&serde_json::json!({ "sub": "x" }));
    assert_eq!(decode_username(&token), None);
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn load_from_empty_storage_is_anonymous() {
    let storage = MemoryStorage::new();
    let session = Session::load(&storage);
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.current_user(), DEFAULT_USERNAME);
}

#[test]
fn load_treats_empty_token_as_absent() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "");
    assert!(!Session::load(&storage).is_authenticated());
}

#[test]
fn set_token_persists_token_and_decoded_username() {
    let storage = MemoryStorage::new();
    let token = jwt_with(&serde_json::json!({ "username": "maria" }));
    let mut session = Session::default();

    session.set_token(&storage, &token, Some("ignored"));

    assert_eq!(storage.get(TOKEN_KEY), Some(token.clone()));
    assert_eq!(storage.get(USERNAME_KEY), Some("maria".to_owned()));
    assert_eq!(session.token(), Some(token.as_str()));
    assert_eq!(session.current_user(), "maria");
    assert_eq!(Session::load(&storage), session);
}

#[test]
fn set_token_falls_back_to_server_username_for_opaque_tokens() {
    let storage = MemoryStorage::new();
    let mut session = Session::default();

    session.set_token(&storage, "opaque-key", Some("juan"));

    assert_eq!(storage.get(USERNAME_KEY), Some("juan".to_owned()));
    assert_eq!(session.current_user(), "juan");
}

#[test]
fn set_token_without_any_username_drops_stale_name() {
    let storage = MemoryStorage::new();
    storage.set(USERNAME_KEY, "previous");
    let mut session = Session::load(&storage);

    session.set_token(&storage, "opaque-key", None);

    assert_eq!(storage.get(USERNAME_KEY), None);
    assert_eq!(session.current_user(), DEFAULT_USERNAME);
}

#[test]
fn clear_removes_both_keys() {
    let storage = MemoryStorage::new();
    let mut session = Session::default();
    session.set_token(&storage, "opaque-key", Some("juan"));

    session.clear(&storage);

    assert!(storage.entries().is_empty());
    assert_eq!(session, Session::default());
}

#[test]
fn clear_on_anonymous_session_is_harmless() {
    let storage = MemoryStorage::new();
    storage.set("theme", "dark");
    let mut session = Session::default();

    session.clear(&storage);

    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USERNAME_KEY), None);
    assert_eq!(storage.get("theme"), Some("dark".to_owned()));
}

// =============================================================
// avatar_initial
// =============================================================

#[test]
fn avatar_initial_uppercases_first_character() {
    assert_eq!(avatar_initial("maria"), "M");
    assert_eq!(avatar_initial("ñoño"), "Ñ");
    assert_eq!(avatar_initial(""), "");
}
