//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and read/write shared state from the
//! Leptos context providers installed by `App`.

pub mod action_button;
pub mod animated_counter;
pub mod category_bar;
pub mod feedback_panel;
pub mod notification_toast;
pub mod password_field;
pub mod product_grid;
pub mod user_badge;
