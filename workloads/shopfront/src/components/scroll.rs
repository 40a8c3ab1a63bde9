use leptos::ev::MouseEvent;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Fixed button that smooth-scrolls back to the top of the page.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <a href="#" class="scroll-top" aria-label="Back to top" on:click=on_click>
            "↑"
        </a>
    }
}
