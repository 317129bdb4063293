//! REST client for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth and feedback failures
//! degrade to notifications without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Feedback, FeedbackRequest, LoginRequest, LoginResponse, RegisterRequest};

/// Same-origin prefix for every API endpoint.
pub const API_BASE: &str = "/api";

pub const REGISTER_ENDPOINT: &str = "/register/";
pub const LOGIN_ENDPOINT: &str = "/login/";
pub const FEEDBACK_ENDPOINT: &str = "/feedback/";

/// `Authorization` header value for a session token.
#[must_use]
pub fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

/// The operations the storefront performs against its backend.
#[allow(async_fn_in_trait)]
pub trait StoreApi {
    /// `POST /register/`. The success body is ignored.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// `POST /login/`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /feedback/` with the token header.
    async fn submit_feedback(&self, token: &str, request: &FeedbackRequest) -> Result<(), ApiError>;

    /// `GET /feedback/`, with the token header when a session exists.
    async fn list_feedback(&self, token: Option<&str>) -> Result<Vec<Feedback>, ApiError>;
}

/// [`StoreApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl HttpApi {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    /// Full URL for an endpoint path such as [`LOGIN_ENDPOINT`].
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .as_ref()
        .and_then(super::error::message_from_body);
    leptos::logging::warn!("api request to {} failed: {status}", resp.url());
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    leptos::logging::warn!("api request failed: {e}");
    ApiError::Network(e.to_string())
}

impl StoreApi for HttpApi {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(REGISTER_ENDPOINT))
                .json(request)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGIN_ENDPOINT))
                .json(request)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn submit_feedback(&self, token: &str, request: &FeedbackRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(FEEDBACK_ENDPOINT))
                .header("Authorization", &auth_header(token))
                .json(request)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn list_feedback(&self, token: Option<&str>) -> Result<Vec<Feedback>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::get(&self.endpoint(FEEDBACK_ENDPOINT));
            if let Some(token) = token {
                builder = builder.header("Authorization", &auth_header(token));
            }
            let resp = builder.send().await.map_err(network_error)?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            resp.json::<Vec<Feedback>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
