//! Shopfront - client-side storefront page.
//!
//! Loads the static catalog once, renders product cards with loading
//! skeletons, filters client-side and counts add-to-cart clicks.

mod app;
mod components;
mod source;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(app::App);
}
