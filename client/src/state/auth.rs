//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session is only known after hydration
//! reads browser storage, so `loaded` gates every redirect decision.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;

/// Authentication state: the stored session plus whether it has been read yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loaded: bool,
}

impl AuthState {
    /// State after reading `session` from storage.
    #[must_use]
    pub fn loaded(session: Session) -> Self {
        Self { session, loaded: true }
    }
}
