//! Session token lifecycle over durable key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is an explicit value owned by `AuthState`. It is read from
//! storage once after mount (`Session::load`) and every mutation writes
//! through to storage immediately, so storage and the in-memory copy never
//! drift apart.
//!
//! The username is decoded from the token payload without verification. It is
//! display-only and must never gate access to anything.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Mutex;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the display username.
pub const USERNAME_KEY: &str = "username";
/// Display name used when no username is known.
pub const DEFAULT_USERNAME: &str = "Student";

/// Durable string key-value storage backing the session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored entries.
    #[must_use]
    pub fn entries(&self) -> HashMap<String, String> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// The current browser session: token plus best-effort display username.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    username: Option<String>,
}

impl Session {
    /// Read the session persisted in `storage`. Empty tokens count as absent.
    pub fn load(storage: &impl SessionStorage) -> Self {
        Self {
            token: storage.get(TOKEN_KEY).filter(|t| !t.is_empty()),
            username: storage.get(USERNAME_KEY).filter(|u| !u.is_empty()),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Display name for the current user, falling back to [`DEFAULT_USERNAME`].
    #[must_use]
    pub fn current_user(&self) -> &str {
        self.username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    /// Store `token` and derive the username from its payload.
    ///
    /// `server_username` is used when the token is not JWT-shaped. With
    /// neither available the stored username is removed.
    pub fn set_token(&mut self, storage: &impl SessionStorage, token: &str, server_username: Option<&str>) {
        storage.set(TOKEN_KEY, token);
        let username = decode_username(token).or_else(|| {
            server_username
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
        });
        match &username {
            Some(name) => storage.set(USERNAME_KEY, name),
            None => storage.remove(USERNAME_KEY),
        }
        self.token = Some(token.to_owned());
        self.username = username;
    }

    /// Remove both session keys from storage and forget the session.
    pub fn clear(&mut self, storage: &impl SessionStorage) {
        storage.remove(TOKEN_KEY);
        storage.remove(USERNAME_KEY);
        self.token = None;
        self.username = None;
    }
}

/// Decode the `username` claim from a JWT-shaped token without verifying it.
///
/// Returns `None` for anything that is not `header.payload[.signature]` with a
/// base64 JSON payload carrying a non-empty string `username`.
#[must_use]
pub fn decode_username(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = decode_segment(payload)?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims
        .get("username")?
        .as_str()
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let unpadded = segment.trim_end_matches('=');
    if unpadded.is_empty() {
        return None;
    }
    URL_SAFE_NO_PAD
        .decode(unpadded)
        .or_else(|_| STANDARD_NO_PAD.decode(unpadded))
        .ok()
}

/// Uppercased first character of `name`, used for avatars.
#[must_use]
pub fn avatar_initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
