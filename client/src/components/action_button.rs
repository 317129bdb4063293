//! Submit button with an idle/loading state machine.
//!
//! While `loading` is true the button is disabled and shows a spinner with
//! the loading label. It returns to the idle label whatever the outcome.

#[cfg(test)]
#[path = "action_button_test.rs"]
mod action_button_test;

use leptos::prelude::*;

const SPINNER_ICON: &str = "fas fa-spinner fa-spin";

/// Icon and text shown for the given loading state.
#[must_use]
pub fn button_face(
    loading: bool,
    icon: &'static str,
    label: &'static str,
    loading_label: &'static str,
) -> (&'static str, &'static str) {
    if loading { (SPINNER_ICON, loading_label) } else { (icon, label) }
}

#[component]
pub fn ActionButton(
    label: &'static str,
    loading_label: &'static str,
    icon: &'static str,
    #[prop(into)] loading: Signal<bool>,
    #[prop(default = "btn-primary")] class: &'static str,
) -> impl IntoView {
    let face = move || button_face(loading.get(), icon, label, loading_label);

    view! {
        <button class=class type="submit" disabled=move || loading.get()>
            <i class=move || face().0></i>
            " "
            {move || face().1}
        </button>
    }
}
