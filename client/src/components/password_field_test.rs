use super::*;

#[test]
fn hidden_password_offers_show() {
    let toggle = password_toggle(false);
    assert_eq!(toggle.input_type, "password");
    assert_eq!(toggle.aria_label, "Show password");
    assert_eq!(toggle.icon, "fas fa-eye");
}

#[test]
fn visible_password_offers_hide() {
    let toggle = password_toggle(true);
    assert_eq!(toggle.input_type, "text");
    assert_eq!(toggle.aria_label, "Hide password");
    assert_eq!(toggle.icon, "fas fa-eye-slash");
}
