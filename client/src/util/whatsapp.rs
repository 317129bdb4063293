//! WhatsApp deep links for store inquiries and orders.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

/// Store contact number in international format without `+`.
pub const WHATSAPP_PHONE: &str = "639123456789";

pub const INQUIRY_MESSAGE: &str = "Hello SariSari Hub! I have a question about your products.";

/// Message pre-filled when ordering `product_name`.
#[must_use]
pub fn order_message(product_name: &str, username: &str) -> String {
    format!("Hi SariSari Hub! I'd like to order: {product_name}. My username is {username}")
}

/// `wa.me` link opening a chat with `message` pre-filled.
#[must_use]
pub fn chat_url(message: &str) -> String {
    format!("https://wa.me/{WHATSAPP_PHONE}?text={}", urlencoding::encode(message))
}

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                leptos::logging::warn!("could not open {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
