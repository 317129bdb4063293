use super::*;
use crate::state::session::MemoryStorage;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(!state.session.is_authenticated());
}

#[test]
fn auth_state_default_not_loaded() {
    let state = AuthState::default();
    assert!(!state.loaded);
}

#[test]
fn loaded_marks_state_ready() {
    let storage = MemoryStorage::new();
    let mut session = Session::default();
    session.set_token(&storage, "abc", Some("maria"));

    let state = AuthState::loaded(session.clone());

    assert!(state.loaded);
    assert_eq!(state.session, session);
}
