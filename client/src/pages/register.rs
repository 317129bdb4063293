//! Registration page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::prepare_register;
use crate::components::action_button::ActionButton;
use crate::components::password_field::PasswordField;
use crate::state::auth::AuthState;
use crate::state::notify::{NotificationState, notify};
use crate::state::ui::UiState;
use crate::util::auth::{LOGIN_PATH, REGISTER_PATH, install_route_guard};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();
    install_route_guard(REGISTER_PATH, auth, ui, notifications, navigate.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let prepared = prepare_register(&username.get_untracked(), &email.get_untracked(), &password.get_untracked());
        let request = match prepared {
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
                let report = crate::actions::register(&api, &request).await;
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
                    <i class="fas fa-user-plus fa-beat"></i>
                    <h1>"Create Account"</h1>
                    <p class="auth-card__subtitle">"Join SariSari Hub and start ordering"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="register-username">"Username"</label>
                    <input
                        id="register-username"
                        class="form-input"
                        type="text"
                        placeholder="Choose a username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="form-label" for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        class="form-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="form-label" for="register-password">"Password"</label>
                    <PasswordField
                        id="register-password"
                        placeholder="Create a password"
                        value=password
                        autocomplete="new-password"
                    />
                    <ActionButton
                        label="Create Account"
                        loading_label="Creating Account..."
                        icon="fas fa-user-plus"
                        loading=busy
                    />
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Login here"</a>
                </p>
            </div>
        </div>
    }
}
