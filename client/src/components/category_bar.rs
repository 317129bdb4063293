//! Category filter buttons for the catalog.

use leptos::prelude::*;

use crate::state::catalog::CategoryFilter;
use crate::state::ui::UiState;

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="category-bar" role="toolbar" aria-label="Product categories">
            {CategoryFilter::choices()
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="category-btn"
                            class:active=move || ui.with(|u| u.category == filter)
                            type="button"
                            data-category=filter.slug()
                            on:click=move |_| ui.update(|u| u.category = filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
