//! User actions: register, login, logout, and feedback.
//!
//! ARCHITECTURE
//! ============
//! Each action is split so pages can drive the button state machine around
//! the network call:
//!
//! 1. `prepare_*` validates form input synchronously. An `Err` carries the
//!    notification to show, and no request is made.
//! 2. The async step issues exactly one request through [`StoreApi`].
//! 3. The result becomes an [`ActionReport`]: the notification to show and an
//!    optional delayed redirect.
//!
//! Session writes happen only in `complete_login` and `logout`.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::StoreApi;
use crate::net::types::{FeedbackRequest, LoginRequest, RegisterRequest};
use crate::state::feedback::{FeedbackList, sort_newest_first};
use crate::state::notify::NotificationKind;
use crate::state::session::{Session, SessionStorage};
use crate::util::auth::{HOME_PATH, LOGIN_PATH, STORE_PATH};

pub const REGISTER_FIELDS_MISSING: &str = "Please fill in all fields";
pub const REGISTER_SUCCESS: &str = "🎉 Account created successfully! Redirecting to login...";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FIELDS_MISSING: &str = "Please enter username and password";
pub const LOGIN_SUCCESS: &str = "🎉 Welcome back! Redirecting to store...";
pub const LOGIN_FAILED: &str = "Invalid credentials";
pub const LOGOUT_SUCCESS: &str = "👋 Logged out successfully";
pub const FEEDBACK_EMPTY: &str = "Please write your feedback first";
pub const FEEDBACK_NEEDS_LOGIN: &str = "Please login to submit feedback";
pub const FEEDBACK_SUCCESS: &str = "✨ Thank you for your valuable feedback!";
pub const FEEDBACK_FAILED: &str = "Failed to submit feedback";

pub const AFTER_REGISTER_DELAY_MS: u32 = 2000;
pub const AFTER_LOGIN_DELAY_MS: u32 = 1500;
pub const AFTER_LOGOUT_DELAY_MS: u32 = 1500;

/// Navigation scheduled after an action completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub delay_ms: u32,
}

/// What the page should show (and where it should go) after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionReport {
    pub kind: NotificationKind,
    pub message: String,
    pub redirect: Option<Redirect>,
}

impl ActionReport {
    fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into(), redirect: None }
    }

    fn success(message: &str, redirect: Option<Redirect>) -> Self {
        Self { kind: NotificationKind::Success, message: message.to_owned(), redirect }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Validate the registration form. Username and email are trimmed.
///
/// # Errors
///
/// Returns the notification to show if any field is empty.
pub fn prepare_register(username: &str, email: &str, password: &str) -> Result<RegisterRequest, ActionReport> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ActionReport::error(REGISTER_FIELDS_MISSING));
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

pub async fn register<A: StoreApi>(api: &A, request: &RegisterRequest) -> ActionReport {
    match api.register(request).await {
        Ok(()) => ActionReport::success(
            REGISTER_SUCCESS,
            Some(Redirect { path: LOGIN_PATH, delay_ms: AFTER_REGISTER_DELAY_MS }),
        ),
        Err(e) => ActionReport::error(e.user_message(REGISTER_FAILED)),
    }
}

/// Validate the login form. The username is trimmed, the password is not.
///
/// # Errors
///
/// Returns the notification to show if either field is empty.
pub fn prepare_login(username: &str, password: &str) -> Result<LoginRequest, ActionReport> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ActionReport::error(LOGIN_FIELDS_MISSING));
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Credentials granted by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub username: Option<String>,
}

/// Exchange credentials for a token. Does not touch the session.
///
/// # Errors
///
/// Returns the notification to show when the request fails or the response
/// carries no token.
pub async fn login<A: StoreApi>(api: &A, request: &LoginRequest) -> Result<LoginGrant, ActionReport> {
    let response = api
        .login(request)
        .await
        .map_err(|e| ActionReport::error(e.user_message(LOGIN_FAILED)))?;
    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ActionReport::error(LOGIN_FAILED))?;
    Ok(LoginGrant { token, username: response.username })
}

/// Persist a granted session and report success.
pub fn complete_login(grant: &LoginGrant, session: &mut Session, storage: &impl SessionStorage) -> ActionReport {
    session.set_token(storage, &grant.token, grant.username.as_deref());
    ActionReport::success(
        LOGIN_SUCCESS,
        Some(Redirect { path: STORE_PATH, delay_ms: AFTER_LOGIN_DELAY_MS }),
    )
}

/// Forget the session locally. No server call is made.
pub fn logout(session: &mut Session, storage: &impl SessionStorage) -> ActionReport {
    session.clear(storage);
    ActionReport {
        kind: NotificationKind::Info,
        message: LOGOUT_SUCCESS.to_owned(),
        redirect: Some(Redirect { path: HOME_PATH, delay_ms: AFTER_LOGOUT_DELAY_MS }),
    }
}

/// A validated feedback submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackDraft {
    token: String,
    request: FeedbackRequest,
}

impl FeedbackDraft {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.request.message
    }
}

/// Validate a feedback message against the current session.
///
/// # Errors
///
/// Returns the notification to show for an empty message or a missing token.
pub fn prepare_feedback(message: &str, session: &Session) -> Result<FeedbackDraft, ActionReport> {
    let message = message.trim();
    if message.is_empty() {
        return Err(ActionReport::error(FEEDBACK_EMPTY));
    }
    let Some(token) = session.token() else {
        return Err(ActionReport::error(FEEDBACK_NEEDS_LOGIN));
    };
    Ok(FeedbackDraft {
        token: token.to_owned(),
        request: FeedbackRequest { message: message.to_owned() },
    })
}

/// Post a draft. A success report means the list should be reloaded.
pub async fn submit_feedback<A: StoreApi>(api: &A, draft: &FeedbackDraft) -> ActionReport {
    match api.submit_feedback(&draft.token, &draft.request).await {
        Ok(()) => ActionReport::success(FEEDBACK_SUCCESS, None),
        Err(_) => ActionReport::error(FEEDBACK_FAILED),
    }
}

/// Fetch the feedback list, newest first. Failures become [`FeedbackList::Failed`].
pub async fn load_feedback<A: StoreApi>(api: &A, session: &Session) -> FeedbackList {
    match api.list_feedback(session.token()).await {
        Ok(mut items) => {
            sort_newest_first(&mut items);
            FeedbackList::Loaded(items)
        }
        Err(_) => FeedbackList::Failed,
    }
}
