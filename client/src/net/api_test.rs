use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let api = HttpApi::default();
    assert_eq!(api.endpoint(LOGIN_ENDPOINT), "/api/login/");
    assert_eq!(api.endpoint(REGISTER_ENDPOINT), "/api/register/");
    assert_eq!(api.endpoint(FEEDBACK_ENDPOINT), "/api/feedback/");
}

#[test]
fn endpoint_trims_trailing_slash_from_base() {
    let api = HttpApi::new("https://store.example.edu/api/");
    assert_eq!(api.endpoint(FEEDBACK_ENDPOINT), "https://store.example.edu/api/feedback/");
}

#[test]
fn auth_header_uses_token_scheme() {
    assert_eq!(auth_header("abc123"), "Token abc123");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let api = HttpApi::default();
    let result = futures::executor::block_on(api.list_feedback(Some("t")));
    assert_eq!(result, Err(ApiError::Unavailable));
}
