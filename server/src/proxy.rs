//! Same-origin pass-through for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client calls `/api/<endpoint>` on its own origin. Each request
//! is forwarded once, unchanged, to the configured backend, and the backend's
//! status, content type, and body are relayed back. Failures to reach the
//! backend become `502` with a `{"detail": ...}` body, the same shape the
//! backend uses for its own errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Route prefix stripped before forwarding.
pub const API_PREFIX: &str = "/api/";

/// Request headers copied to the backend.
pub const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid api path: {0}")]
    BadPath(String),
    #[error("storefront backend unavailable")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadPath(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Backend URL for an `/api/{*path}` request.
///
/// `path` is the raw, still percent-encoded request path below `/api/`. It is
/// pasted as-is so encoded `?`, `#` and `/` reach the backend unchanged. The
/// path keeps its trailing slash since the backend routes depend on it.
///
/// # Errors
///
/// Rejects empty paths and `.`/`..` segments, plain or percent-encoded.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path.split('/').any(is_dot_segment) {
        return Err(ProxyError::BadPath(path.to_owned()));
    }
    let mut url = format!("{}/{path}", base.trim_end_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    Ok(url)
}

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// `ANY /api/{*path}`: forward to the backend and relay its response.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let raw_path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .ok_or_else(|| ProxyError::BadPath(uri.path().to_owned()))?;
    let url = upstream_url(&state.api_upstream, raw_path, uri.query())?;

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "api proxy request failed");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, %status, "api proxy response");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(content_type) => response.headers_mut().insert(header::CONTENT_TYPE, content_type),
        None => response.headers_mut().remove(header::CONTENT_TYPE),
    };
    Ok(response)
}
