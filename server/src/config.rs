//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("STOREFRONT_API_UPSTREAM must be an http(s) URL, got {0:?}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin that `/api/*` is forwarded to, without a trailing slash.
    pub api_upstream: String,
}

impl ServerConfig {
    /// Build config from process environment variables.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `STOREFRONT_API_UPSTREAM`: backend origin, default `http://127.0.0.1:8000`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()) {
            Some(raw) if !raw.is_empty() => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            _ => DEFAULT_PORT,
        };

        let api_upstream = lookup("STOREFRONT_API_UPSTREAM")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_owned());
        if !(api_upstream.starts_with("http://") || api_upstream.starts_with("https://")) {
            return Err(ConfigError::InvalidUpstream(api_upstream));
        }
        let api_upstream = api_upstream.trim_end_matches('/').to_owned();

        Ok(Self { port, api_upstream })
    }
}
