//! Route guard and signed-in user presentation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs the guard with its own path. Once the session has been
//! read from storage the guard makes a single decision for the page load:
//! send anonymous visitors away from the store, send signed-in users away from
//! the login/register forms, or pick a greeting for the user badge.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::actions::ActionReport;
use crate::state::auth::AuthState;
use crate::state::notify::{NotificationKind, NotificationState, notify};
use crate::state::ui::UiState;
use crate::util::delay;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const STORE_PATH: &str = "/store";

/// Delay before an anonymous visitor is sent to the login page.
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1000;
/// Delay before a signed-in user is sent from an auth form to the store.
pub const STORE_REDIRECT_DELAY_MS: u32 = 500;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login to access the store";

pub const GREETINGS: [&str; 5] = ["Hello", "Welcome back", "Great to see you", "Hi there", "Hey"];

/// Outcome of checking a path against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Anonymous visitor on a protected page.
    RequireLogin,
    /// Signed-in user on the login or register page.
    LeaveAuthPage,
    /// Page renders normally.
    Render,
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') { path.to_owned() } else { format!("{path}/") }
}

/// Whether `path` requires a session. Trailing slashes are optional.
#[must_use]
pub fn is_protected_path(path: &str) -> bool {
    with_trailing_slash(path).contains("/store/")
}

/// Whether `path` is one of the login/register forms.
#[must_use]
pub fn is_auth_path(path: &str) -> bool {
    let path = with_trailing_slash(path);
    path.contains("/login/") || path.contains("/register/")
}

#[must_use]
pub fn decide(path: &str, authenticated: bool) -> GuardDecision {
    if !authenticated && is_protected_path(path) {
        GuardDecision::RequireLogin
    } else if authenticated && is_auth_path(path) {
        GuardDecision::LeaveAuthPage
    } else {
        GuardDecision::Render
    }
}

/// Greeting line for the store header. `roll` is a uniform sample in `[0, 1)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn greeting_for(user: &str, roll: f64) -> String {
    let slots = GREETINGS.len();
    let index = ((roll.clamp(0.0, 1.0) * slots as f64).floor() as usize).min(slots - 1);
    format!("{}, {user}! 🎉", GREETINGS[index])
}

/// Uniform sample in `[0, 1)`; fixed at zero outside the browser.
#[must_use]
pub fn random_roll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Check `path` once the session is loaded and act on the decision.
pub fn install_route_guard<F>(
    path: &'static str,
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    notifications: RwSignal<NotificationState>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let checked = StoredValue::new(false);
    Effect::new(move || {
        let state = auth.get();
        if !state.loaded || checked.get_value() {
            return;
        }
        checked.set_value(true);
        match decide(path, state.session.is_authenticated()) {
            GuardDecision::RequireLogin => {
                notify(notifications, NotificationKind::Info, LOGIN_REQUIRED_MESSAGE);
                let navigate = navigate.clone();
                delay::after(LOGIN_REDIRECT_DELAY_MS, move || {
                    navigate(LOGIN_PATH, NavigateOptions::default());
                });
            }
            GuardDecision::LeaveAuthPage => {
                let navigate = navigate.clone();
                delay::after(STORE_REDIRECT_DELAY_MS, move || {
                    navigate(STORE_PATH, NavigateOptions::default());
                });
            }
            GuardDecision::Render => {
                let greeting = greeting_for(state.session.current_user(), random_roll());
                ui.update(|u| u.greeting = Some(greeting));
            }
        }
    });
}

/// Show an action's notification and schedule its redirect, if any.
pub fn follow_report<F>(report: ActionReport, notifications: RwSignal<NotificationState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    notify(notifications, report.kind, report.message);
    if let Some(redirect) = report.redirect {
        delay::after(redirect.delay_ms, move || {
            navigate(redirect.path, NavigateOptions::default());
        });
    }
}
