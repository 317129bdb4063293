use super::*;

#[test]
fn idle_face_shows_label_and_icon() {
    assert_eq!(
        button_face(false, "fas fa-sign-in-alt", "Login", "Logging in..."),
        ("fas fa-sign-in-alt", "Login")
    );
}

#[test]
fn loading_face_shows_spinner() {
    assert_eq!(
        button_face(true, "fas fa-sign-in-alt", "Login", "Logging in..."),
        (SPINNER_ICON, "Logging in...")
    );
}
