//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification_toast::NotificationToast;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage, store::StorePage};
use crate::state::auth::AuthState;
use crate::state::notify::NotificationState;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Font Awesome stylesheet used for every icon in the storefront.
const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=FONT_AWESOME_CSS/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, reads the stored session once after
/// hydration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(notifications);

    // Storage is browser-only, so the session is read after mount rather
    // than during SSR.
    Effect::new(move || {
        if !auth.with_untracked(|a| a.loaded) {
            auth.set(AuthState::loaded(Session::load(&BrowserStorage)));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="SariSari Hub"/>

        <Router>
            <NotificationToast/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("store") view=StorePage/>
                </Routes>
            </main>
        </Router>
    }
}
