//! Password input with a show/hide toggle.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

/// Attributes of the input and its toggle for one visibility state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordToggle {
    pub input_type: &'static str,
    pub icon: &'static str,
    pub aria_label: &'static str,
}

#[must_use]
pub fn password_toggle(visible: bool) -> PasswordToggle {
    if visible {
        PasswordToggle { input_type: "text", icon: "fas fa-eye-slash", aria_label: "Hide password" }
    } else {
        PasswordToggle { input_type: "password", icon: "fas fa-eye", aria_label: "Show password" }
    }
}

#[component]
pub fn PasswordField(
    id: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = "current-password")] autocomplete: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let toggle = move || password_toggle(visible.get());

    view! {
        <div class="password-field">
            <input
                id=id
                class="form-input"
                type=move || toggle().input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                class="password-toggle"
                type="button"
                aria-label=move || toggle().aria_label
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                <i class=move || toggle().icon></i>
            </button>
        </div>
    }
}
