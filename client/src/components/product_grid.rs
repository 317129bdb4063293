//! Product grid for the store page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the selected category from `UiState` and renders the matching
//! catalog entries. Each card links to a WhatsApp order chat pre-filled with
//! the product name and the signed-in user's display name.

use leptos::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::state::auth::AuthState;
use crate::state::catalog::{Product, filter_products};
use crate::state::ui::UiState;
use crate::util::whatsapp::{chat_url, open_in_new_tab, order_message};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let products = Memo::new(move |_| filter_products(ui.with(|u| u.category)));
    let count = Signal::derive(move || products.with(Vec::len));

    view! {
        <section class="products">
            <div class="products__header">
                <h2>"Our Products"</h2>
                <span class="products__count">
                    <AnimatedCounter target=count id="product-count"/>
                    " items"
                </span>
            </div>
            <div class="products-grid">
                <Show
                    when=move || products.with(|p| !p.is_empty())
                    fallback=|| {
                        view! {
                            <div class="no-products">
                                <i class="fas fa-box-open"></i>
                                <h3>"No products found in this category"</h3>
                                <p>"Try selecting a different category"</p>
                            </div>
                        }
                    }
                >
                    <For each=move || products.get() key=|product| product.id let:product>
                        <ProductCard product=product/>
                    </For>
                </Show>
            </div>
        </section>
    }
}

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_order = move |_| {
        let message = auth.with_untracked(|a| order_message(product.name, a.session.current_user()));
        open_in_new_tab(&chat_url(&message));
    };

    view! {
        <div class="product-card">
            <div class="product-badge">{product.tag}</div>
            <div class="product-image" style=product.image_background()>
                <i class=product.icon style=product.icon_style()></i>
            </div>
            <div class="product-info">
                <span class="product-category">{product.category.label()}</span>
                <h3 class="product-name">{product.name}</h3>
                <div class="product-price">{product.price}</div>
                <p class="product-description">{product.description}</p>
                <div class="product-footer">
                    <div class="product-rating">
                        <i class="fas fa-star"></i>
                        <i class="fas fa-star"></i>
                        <i class="fas fa-star"></i>
                        <i class="fas fa-star"></i>
                        <i class="fas fa-star-half-alt"></i>
                        <span>"4.5"</span>
                    </div>
                    <button
                        class="btn-whatsapp"
                        type="button"
                        title="Order via WhatsApp"
                        aria-label=format!("Order {} via WhatsApp", product.name)
                        on:click=on_order
                    >
                        <i class="fab fa-whatsapp"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}
