//! Single on-screen notification with a manual close button.

use leptos::prelude::*;

use crate::state::notify::NotificationState;

/// Renders the current notification, if any.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    move || {
        notifications.get().current.map(|note| {
            let id = note.id;
            view! {
                <div class=format!("notification notification--{}", note.kind.css_class()) role="status">
                    <i class=note.kind.icon_class()></i>
                    <span class="notification__message">{note.message}</span>
                    <button
                        class="notification__close"
                        aria-label="Close notification"
                        on:click=move |_| notifications.update(|s| s.dismiss(id))
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }
        })
    }
}
