//! Landing page with links into the store and a WhatsApp inquiry shortcut.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::notify::NotificationState;
use crate::state::ui::UiState;
use crate::util::auth::{HOME_PATH, LOGIN_PATH, REGISTER_PATH, STORE_PATH, install_route_guard};
use crate::util::whatsapp::{INQUIRY_MESSAGE, chat_url, open_in_new_tab};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    install_route_guard(HOME_PATH, auth, ui, notifications, use_navigate());

    let signed_in = move || auth.with(|a| a.loaded && a.session.is_authenticated());

    view! {
        <div class="home-page">
            <section class="hero">
                <i class="fas fa-store fa-bounce hero__icon"></i>
                <h1 class="hero__title">"SariSari Hub"</h1>
                <p class="hero__tagline">
                    "Snacks, drinks, school supplies and more, right on campus."
                </p>
                <div class="hero__actions">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="btn-primary" href=LOGIN_PATH>
                                    <i class="fas fa-sign-in-alt"></i>
                                    " Login"
                                </a>
                                <a class="btn-secondary" href=REGISTER_PATH>
                                    <i class="fas fa-user-plus"></i>
                                    " Register"
                                </a>
                            }
                        }
                    >
                        <a class="btn-primary" href=STORE_PATH>
                            <i class="fas fa-shopping-basket"></i>
                            " Go to Store"
                        </a>
                    </Show>
                </div>
            </section>
            <section class="contact">
                <h2>"Questions?"</h2>
                <p>"Message us on WhatsApp and we'll get back to you."</p>
                <button
                    class="btn-whatsapp btn-whatsapp--wide"
                    type="button"
                    on:click=move |_| open_in_new_tab(&chat_url(INQUIRY_MESSAGE))
                >
                    <i class="fab fa-whatsapp"></i>
                    " Chat with us"
                </button>
            </section>
        </div>
    }
}
