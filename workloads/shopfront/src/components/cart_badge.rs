use leptos::prelude::*;

/// Cart icon with the add-to-cart count.
#[component]
pub fn CartBadge(#[prop(into)] count: Signal<u32>) -> impl IntoView {
    view! {
        <div class="cart-badge">
            <span class="cart-icon">"🛒"</span>
            <span class="cart-count">{move || count.get()}</span>
        </div>
    }
}
