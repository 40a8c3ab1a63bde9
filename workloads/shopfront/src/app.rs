//! Page root: owns the page state and wires components to it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;

use turbo_catalog::prelude::{load, PageEvent, PageState, StorefrontConfig};

use crate::components::{CartBadge, FilterPanel, FilterToggle, ProductGrid, ScrollToTop};
use crate::source::BrowserFetchSource;

const CONFIG_TOML: &str = include_str!("../shopfront.toml");

/// Page configuration, falling back to defaults when the bundled file is invalid.
pub fn page_config() -> StorefrontConfig {
    match StorefrontConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid shopfront.toml, using defaults");
            StorefrontConfig::default()
        }
    }
}

/// Replace the page snapshot with the one that follows `event`.
pub fn dispatch(state: RwSignal<PageState>, event: PageEvent) {
    state.update(|current| *current = std::mem::take(current).reduce(event));
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = page_config();
    let state = RwSignal::new(PageState::new(&config));

    // The one catalog load of this page lifetime.
    let source = BrowserFetchSource::new(config.catalog_url.clone());
    dispatch(state, PageEvent::LoadStarted);
    spawn_local(async move {
        let result = load(&source).await;
        dispatch(state, PageEvent::LoadFinished(result));
    });

    let cart_count = Signal::derive(move || state.with(PageState::cart_count));

    view! {
        <Title text="Shopfront"/>
        <Meta name="description" content="Browse and filter the Shopfront catalog"/>

        <CartBadge count=cart_count/>
        <FilterToggle state=state/>
        <FilterPanel state=state/>
        <ProductGrid state=state ripple_ms=config.ripple_ms/>
        <ScrollToTop/>
    }
}
