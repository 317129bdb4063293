//! REST failure classification and server message extraction.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. `Display` is for logs. Callers turn an `ApiError`
//! into a notification or inline placeholder via [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single storefront API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message if there is one, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Checks `detail`, `message`, and `error` in that order, then the first
/// field-level validation message (`{"field": ["msg", ...]}`).
#[must_use]
pub fn message_from_body(body: &serde_json::Value) -> Option<String> {
    let object = body.as_object()?;
    for key in ["detail", "message", "error"] {
        if let Some(text) = object.get(key).and_then(first_text) {
            return Some(text);
        }
    }
    object.values().find_map(first_text)
}

fn first_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}
