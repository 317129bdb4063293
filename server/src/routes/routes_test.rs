use super::*;

use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt as _;

use crate::config::ServerConfig;

fn app() -> Router {
    let config = ServerConfig { port: 0, api_upstream: "http://127.0.0.1:9".into() };
    api_routes(AppState::new(&config).unwrap())
}

async fn send(uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(send("/healthz").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn trailing_slash_pages_redirect_to_app_routes() {
    for (from, to) in [("/login/", "/login"), ("/register/", "/register"), ("/store/", "/store")] {
        let response = send(from).await;
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT, "{from}");
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), to);
    }
}

#[tokio::test]
async fn api_traversal_is_rejected_before_forwarding() {
    let response = send("/api/feedback/./x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_paths_are_not_found_without_leptos() {
    assert_eq!(send("/nope").await.status(), StatusCode::NOT_FOUND);
}
