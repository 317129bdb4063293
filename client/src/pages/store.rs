//! Store page: user header, catalog, and feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only protected route. Content renders once the session is known to be
//! present; anonymous visitors (and users who just logged out) see a
//! placeholder while a redirect is pending.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::category_bar::CategoryBar;
use crate::components::feedback_panel::FeedbackPanel;
use crate::components::product_grid::ProductGrid;
use crate::components::user_badge::UserBadge;
use crate::state::auth::AuthState;
use crate::state::notify::NotificationState;
use crate::state::ui::UiState;
use crate::util::auth::{LOGIN_REQUIRED_MESSAGE, STORE_PATH, install_route_guard};

#[component]
pub fn StorePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    install_route_guard(STORE_PATH, auth, ui, notifications, use_navigate());

    let signed_in = move || auth.with(|a| a.loaded && a.session.is_authenticated());

    view! {
        <Show
            when=signed_in
            fallback=move || {
                view! {
                    <div class="store-page store-page--pending">
                        <i class="fas fa-spinner fa-spin"></i>
                        <p>{move || pending_message(auth.with(|a| a.loaded))}</p>
                    </div>
                }
            }
        >
            <div class="store-page">
                <header class="store-header">
                    <div class="store-header__brand">
                        <i class="fas fa-store"></i>
                        <span>"SariSari Hub"</span>
                    </div>
                    <UserBadge/>
                </header>
                <CategoryBar/>
                <ProductGrid/>
                <FeedbackPanel/>
            </div>
        </Show>
    }
}

/// Placeholder text while the catalog is hidden.
fn pending_message(session_loaded: bool) -> &'static str {
    if session_loaded { LOGIN_REQUIRED_MESSAGE } else { "Checking your session..." }
}
