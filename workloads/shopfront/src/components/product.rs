//! Product grid, product card and loading skeletons.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use turbo_catalog::page::EMPTY_MESSAGE;
use turbo_catalog::prelude::{PageEvent, PageState, PageView, Product};

use crate::app::dispatch;

#[component]
pub fn ProductGrid(state: RwSignal<PageState>, ripple_ms: u64) -> impl IntoView {
    // Draft edits and cart clicks do not change this, so the grid only
    // re-renders on load and apply.
    let page_view = Memo::new(move |_| state.with(PageState::view));

    view! {
        <section class="product-area">
            <div class="product-grid">
                {move || match page_view.get() {
                    PageView::Skeletons(count) => {
                        (0..count).map(|_| view! { <ProductCardSkeleton/> }).collect::<Vec<_>>().into_any()
                    }
                    PageView::Failed(message) => view! {
                        <p class="load-error">{message}</p>
                    }.into_any(),
                    PageView::Empty => view! {
                        <p class="empty">{EMPTY_MESSAGE}</p>
                    }.into_any(),
                    PageView::Products(products) => products
                        .iter()
                        .cloned()
                        .map(|product| view! { <ProductCard product=product state=state ripple_ms=ripple_ms/> })
                        .collect::<Vec<_>>()
                        .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product, state: RwSignal<PageState>, ripple_ms: u64) -> impl IntoView {
    let ripple = RwSignal::new(None::<(f64, f64)>);
    let alt = format!("Image of {}", product.name);
    let price = product.price_display();

    let on_add = move |ev: MouseEvent| {
        if let Some(at) = click_offset(&ev) {
            ripple.set(Some(at));
            set_timeout(
                move || {
                    let _ = ripple.try_set(None);
                },
                Duration::from_millis(ripple_ms),
            );
        }
        dispatch(state, PageEvent::AddToCart);
    };

    view! {
        <article class="product-card">
            <img src=product.image alt=alt class="product-image"/>
            <h3>{product.name}</h3>
            <p class="product-description">{product.description}</p>
            <p class="product-price">"Price: " {price}</p>
            <div class="product-actions">
                <button class="btn" on:click=on_add>
                    "Add To Cart"
                    <span
                        class=move || if ripple.get().is_some() { "ripple animate" } else { "ripple" }
                        style=move || {
                            ripple
                                .get()
                                .map(|(x, y)| format!("left: {x}px; top: {y}px;"))
                                .unwrap_or_default()
                        }
                    ></span>
                </button>
                <a class="btn" href="#">"Buy Now"</a>
            </div>
        </article>
    }
}

/// Click position relative to the clicked element.
fn click_offset(ev: &MouseEvent) -> Option<(f64, f64)> {
    let target = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    Some((
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    ))
}

// ============================================================================
// Skeleton Components (Loading States)
// ============================================================================

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-card">
            <div class="skeleton" style="height: 10rem; margin-bottom: 1rem;"></div>
            <div class="skeleton" style="height: 1.25rem; margin-bottom: 0.75rem;"></div>
            <div class="skeleton" style="height: 1rem; margin-bottom: 0.5rem;"></div>
            <div class="skeleton" style="height: 1rem;"></div>
        </div>
    }
}
