use super::*;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::RawQuery;
use axum::http::{Request, Uri};
use axum::routing::any;
use tower::ServiceExt;

use crate::config::ServerConfig;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_trailing_slash() {
    assert_eq!(
        upstream_url("http://backend:8000", "login/", None).unwrap(),
        "http://backend:8000/login/"
    );
}

#[test]
fn upstream_url_appends_query() {
    assert_eq!(
        upstream_url("http://backend:8000/", "feedback/", Some("page=2")).unwrap(),
        "http://backend:8000/feedback/?page=2"
    );
    assert_eq!(
        upstream_url("http://backend:8000", "feedback/", Some("")).unwrap(),
        "http://backend:8000/feedback/"
    );
}

#[test]
fn upstream_url_rejects_traversal_and_empty_paths() {
    assert!(matches!(upstream_url("http://b", "../admin/", None), Err(ProxyError::BadPath(_))));
    assert!(matches!(upstream_url("http://b", "feedback/./x", None), Err(ProxyError::BadPath(_))));
    assert!(matches!(upstream_url("http://b", "", None), Err(ProxyError::BadPath(_))));
}

#[test]
fn upstream_url_rejects_encoded_dot_segments() {
    assert!(matches!(upstream_url("http://b", "%2e%2e/admin/", None), Err(ProxyError::BadPath(_))));
    assert!(matches!(upstream_url("http://b", ".%2E/admin/", None), Err(ProxyError::BadPath(_))));
    assert!(matches!(upstream_url("http://b", "feedback/%2e/x", None), Err(ProxyError::BadPath(_))));
}

#[test]
fn upstream_url_keeps_percent_encoding() {
    assert_eq!(
        upstream_url("http://b", "feedback%2F%3Fx=1", None).unwrap(),
        "http://b/feedback%2F%3Fx=1"
    );
}

// =============================================================================
// ProxyError responses
// =============================================================================

#[tokio::test]
async fn bad_path_maps_to_400_with_detail() {
    let response = ProxyError::BadPath("../x".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["detail"], "invalid api path: ../x");
}

// =============================================================================
// forward (against an in-process fake backend)
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, RawQuery(query): RawQuery, body: Bytes) -> Json<serde_json::Value> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    Json(serde_json::json!({
        "method": method.as_str(),
        "path": uri.path(),
        "authorization": auth,
        "query": query,
        "body": String::from_utf8_lossy(&body),
    }))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/feedback/", any(echo))
        .route(
            "/login/",
            any(|| async { (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "detail": "bad credentials" }))) }),
        )
        .fallback(echo);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(upstream: &str) -> AppState {
    AppState::new(&ServerConfig { port: 0, api_upstream: upstream.to_owned() }).unwrap()
}

async fn proxy(state: AppState, method: Method, uri: &str, headers: HeaderMap, body: &'static str) -> Response {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    *request.headers_mut() = headers;
    Router::new()
        .route("/api/{*path}", any(forward))
        .with_state(state)
        .oneshot(request)
        .await
        .unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn forwards_method_auth_query_and_body() {
    let state = state_for(&spawn_backend().await);
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Token abc".parse().unwrap());
    headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
    headers.insert(header::COOKIE, "secret=1".parse().unwrap());

    let response = proxy(state, Method::POST, "/api/feedback/?x=1", headers, r#"{"message":"hi"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let json = json_body(response).await;
    assert_eq!(json["method"], "POST");
    assert_eq!(json["path"], "/feedback/");
    assert_eq!(json["authorization"], "Token abc");
    assert_eq!(json["query"], "x=1");
    assert_eq!(json["body"], r#"{"message":"hi"}"#);
}

#[tokio::test]
async fn relays_backend_error_status_and_body() {
    let state = state_for(&spawn_backend().await);
    let response = proxy(state, Method::POST, "/api/login/", HeaderMap::new(), "{}").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["detail"], "bad credentials");
}

#[tokio::test]
async fn unreachable_backend_maps_to_502() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = state_for(&format!("http://{addr}"));
    let response = proxy(state, Method::GET, "/api/feedback/", HeaderMap::new(), "").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await["detail"], "storefront backend unavailable");
}

#[tokio::test]
async fn encoded_query_marker_stays_in_the_path() {
    let state = state_for(&spawn_backend().await);
    let response = proxy(state, Method::GET, "/api/feedback%2F%3Finjected=1", HeaderMap::new(), "").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["path"], "/feedback%2F%3Finjected=1");
    assert_eq!(json["query"], serde_json::Value::Null);
}

#[tokio::test]
async fn encoded_traversal_is_rejected() {
    let state = state_for(&spawn_backend().await);
    let response = proxy(state, Method::GET, "/api/%2e%2e/admin/", HeaderMap::new(), "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
