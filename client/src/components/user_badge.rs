//! Signed-in user chip for the store header: avatar initial, name, greeting,
//! and the logout button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::logout;
use crate::state::auth::AuthState;
use crate::state::notify::NotificationState;
use crate::state::session::avatar_initial;
use crate::state::ui::UiState;
use crate::util::auth::follow_report;
use crate::util::storage::BrowserStorage;

#[component]
pub fn UserBadge() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = move || auth.with(|a| a.session.current_user().to_owned());
    let initial = move || avatar_initial(&name());
    let greeting = move || ui.with(|u| u.greeting.clone().unwrap_or_default());

    view! {
        <div class="user-badge">
            <div class="user-badge__avatar">{initial}</div>
            <div class="user-badge__text">
                <span class="user-badge__name">{name}</span>
                <span class="user-badge__greeting">{greeting}</span>
            </div>
            <LogoutButton/>
        </div>
    }
}

/// Clears the session, then returns to the home page after a short delay.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let mut report = None;
        auth.update(|a| report = Some(logout(&mut a.session, &BrowserStorage)));
        if let Some(report) = report {
            follow_report(report, notifications, navigate.clone());
        }
    };

    view! {
        <button class="btn-logout" type="button" on:click=on_logout>
            <i class="fas fa-sign-out-alt"></i>
            " Logout"
        </button>
    }
}
