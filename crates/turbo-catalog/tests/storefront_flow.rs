//! End-to-end page flow: load the catalog, edit filters, apply.

use async_trait::async_trait;
use futures::executor::block_on;
use http::StatusCode;
use turbo_catalog::prelude::*;

const PRODUCTS_JSON: &str = r#"{
    "products": [
        { "id": 1, "name": "Wireless Earbuds", "description": "Noise cancelling",
          "image": "/img/earbuds.jpg", "price": 79.99, "category": "Electronics",
          "rating": 4.5, "stock": 12 },
        { "id": 2, "name": "Desk Lamp", "description": "Warm light",
          "image": "/img/lamp.jpg", "price": 24.5, "category": "Home",
          "rating": 3.9, "stock": 0 },
        { "id": 3, "name": "Mechanical Keyboard", "description": "Clicky",
          "image": "/img/keyboard.jpg", "price": 129.0, "category": "Electronics",
          "rating": 4.8, "stock": 3 },
        { "id": 4, "name": "Throw Pillow", "description": "Soft",
          "image": "/img/pillow.jpg", "price": 18.0, "category": "Home",
          "rating": 4.0, "stock": 0 }
    ],
    "filters": {
        "categories": ["Electronics", "Home"],
        "priceRange": { "min": 0, "max": 300 },
        "stockAvailability": ["In Stock", "Out of Stock"]
    },
    "generatedAt": "2024-05-01"
}"#;

struct StaticSource(Result<FetchResponse, LoadError>);

#[async_trait(?Send)]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<FetchResponse, LoadError> {
        self.0.clone()
    }

    fn describe(&self) -> String {
        "memory://products.json".to_string()
    }
}

fn load_page(source: &StaticSource) -> PageState {
    let state = PageState::default().reduce(PageEvent::LoadStarted);
    let result = block_on(load(source));
    state.reduce(PageEvent::LoadFinished(result))
}

fn visible_names(state: &PageState) -> Vec<String> {
    state.visible().iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_browse_and_filter() {
    let source = StaticSource(Ok(FetchResponse::ok(PRODUCTS_JSON)));
    let state = load_page(&source);
    assert_eq!(state.visible().len(), 4);

    let state = state
        .reduce(PageEvent::ToggleFilterPanel)
        .reduce(PageEvent::EditDraft(FilterEdit::Category("Electronics".into())))
        .reduce(PageEvent::EditDraft(FilterEdit::PriceCeiling(100.0)));

    // Nothing changes until the shopper applies.
    assert_eq!(state.visible().len(), 4);

    let state = state.reduce(PageEvent::ApplyFilters);
    assert_eq!(visible_names(&state), vec!["Wireless Earbuds"]);

    let state = state
        .reduce(PageEvent::EditDraft(FilterEdit::Category(String::new())))
        .reduce(PageEvent::EditDraft(FilterEdit::PriceCeiling(300.0)))
        .reduce(PageEvent::EditDraft(FilterEdit::Stock("Out of Stock".into())))
        .reduce(PageEvent::ApplyFilters)
        .reduce(PageEvent::CloseFilterPanel);
    assert_eq!(visible_names(&state), vec!["Desk Lamp", "Throw Pillow"]);
    assert!(!state.is_filter_panel_open());

    let state = state
        .reduce(PageEvent::EditDraft(FilterEdit::Rating(4.0)))
        .reduce(PageEvent::ApplyFilters);
    assert_eq!(visible_names(&state), vec!["Throw Pillow"]);
}

#[test]
fn test_cart_counter_is_independent_of_filters() {
    let source = StaticSource(Ok(FetchResponse::ok(PRODUCTS_JSON)));
    let state = load_page(&source)
        .reduce(PageEvent::AddToCart)
        .reduce(PageEvent::EditDraft(FilterEdit::Stock("Nope".into())))
        .reduce(PageEvent::ApplyFilters)
        .reduce(PageEvent::AddToCart);

    assert_eq!(state.view(), PageView::Empty);
    assert_eq!(state.cart_count(), 2);
}

#[test]
fn test_missing_products_key_fails_the_page() {
    let body = r#"{ "filters": { "categories": [], "priceRange": { "min": 0, "max": 1 },
                    "stockAvailability": [] } }"#;
    let source = StaticSource(Ok(FetchResponse::ok(body)));
    let state = load_page(&source);

    assert!(matches!(state.load_state(), LoadState::Failed(LoadError::Malformed(_))));
    assert!(state.visible().is_empty());
    assert_eq!(state.view(), PageView::Failed("Failed to load products."));

    // Filtering after a failed load still shows the failure.
    let state = state.reduce(PageEvent::ApplyFilters);
    assert_eq!(state.view(), PageView::Failed("Failed to load products."));
}

#[test]
fn test_not_found_fails_the_page() {
    let source = StaticSource(Ok(FetchResponse::new(StatusCode::NOT_FOUND, "")));
    let state = load_page(&source);
    assert_eq!(
        state.load_state().error(),
        Some(&LoadError::Status(StatusCode::NOT_FOUND))
    );
}

#[test]
fn test_empty_catalog_is_empty_view() {
    let body = r#"{ "products": [], "filters": { "categories": [],
                    "priceRange": { "min": 0, "max": 300 }, "stockAvailability": [] } }"#;
    let source = StaticSource(Ok(FetchResponse::ok(body)));
    let state = load_page(&source).reduce(PageEvent::ApplyFilters);
    assert_eq!(state.view(), PageView::Empty);
}
