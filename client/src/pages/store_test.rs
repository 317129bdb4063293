use super::*;

#[test]
fn pending_message_waits_for_session_then_asks_for_login() {
    assert_eq!(pending_message(false), "Checking your session...");
    assert_eq!(pending_message(true), "Please login to access the store");
}
