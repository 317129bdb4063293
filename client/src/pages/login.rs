//! Login page: username + password exchanged for a session token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::prepare_login;
use crate::components::action_button::ActionButton;
use crate::components::password_field::PasswordField;
use crate::state::auth::AuthState;
use crate::state::notify::{NotificationState, notify};
use crate::state::ui::UiState;
use crate::util::auth::{LOGIN_PATH, REGISTER_PATH, install_route_guard};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();
    install_route_guard(LOGIN_PATH, auth, ui, notifications, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match prepare_login(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(report) => {
                notify(notifications, report.kind, report.message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                let report = match crate::actions::login(&api, &request).await {
                    Ok(grant) => {
                        let mut session = auth.with_untracked(|a| a.session.clone());
                        let report = crate::actions::complete_login(
                            &grant,
                            &mut session,
                            &crate::util::storage::BrowserStorage,
                        );
                        auth.update(|a| a.session = session);
                        report
                    }
                    Err(report) => report,
                };
                busy.set(false);
                crate::util::auth::follow_report(report, notifications, navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <i class="fas fa-store fa-bounce"></i>
                    <h1>"Welcome Back"</h1>
                    <p class="auth-card__subtitle">"Login to continue shopping at SariSari Hub"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        class="form-input"
                        type="text"
                        placeholder="Enter your username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="form-label" for="login-password">"Password"</label>
                    <PasswordField id="login-password" placeholder="Enter your password" value=password/>
                    <ActionButton
                        label="Login"
                        loading_label="Logging in..."
                        icon="fas fa-sign-in-alt"
                        loading=busy
                    />
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=REGISTER_PATH>"Register here"</a>
                </p>
            </div>
        </div>
    }
}
