//! Page state snapshot.
//!
//! The page view owns one [`PageState`] and replaces it on every event with
//! [`PageState::reduce`]. Only two transitions touch products: finishing the
//! catalog load and applying filters. Everything else is draft editing and
//! chrome (filter drawer, cart badge).

use std::sync::Arc;

use tracing::debug;

use crate::cart::CartCounter;
use crate::catalog::{Catalog, FilterVocabulary, PriceBounds, Product};
use crate::config::StorefrontConfig;
use crate::error::LoadError;
use crate::filter::{apply, AppliedSelection, DraftSelection, FilterEdit, FilterSelection};
use crate::store::LoadState;

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The catalog request was issued.
    LoadStarted,
    /// The catalog request settled.
    LoadFinished(Result<Catalog, LoadError>),
    /// A filter control changed.
    EditDraft(FilterEdit),
    /// Put the draft back to the default selection without applying it.
    ResetDraft,
    /// "Apply Filter" was pressed.
    ApplyFilters,
    ToggleFilterPanel,
    CloseFilterPanel,
    /// "Add To Cart" was pressed on some product card.
    AddToCart,
}

/// What the product area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Placeholder cards while the catalog is pending.
    Skeletons(usize),
    /// The load failed; carries the message for shoppers.
    Failed(&'static str),
    /// Loaded, but nothing is visible.
    Empty,
    /// The visible products, in catalog order.
    Products(Arc<[Product]>),
}

/// Message shown when the visible list is empty.
pub const EMPTY_MESSAGE: &str = "No products available.";

/// Immutable snapshot of everything the page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    load: LoadState,
    defaults: FilterSelection,
    draft: DraftSelection,
    applied: AppliedSelection,
    visible: Arc<[Product]>,
    filter_panel_open: bool,
    cart: CartCounter,
    skeleton_count: usize,
    price_slider_fallback: PriceBounds,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(&StorefrontConfig::default())
    }
}

impl PageState {
    /// Fresh page state before the catalog is requested.
    pub fn new(config: &StorefrontConfig) -> Self {
        let defaults = FilterSelection::with_price_range(config.default_price_bounds());
        let draft = DraftSelection::new(defaults.clone());
        let applied = draft.commit();

        Self {
            load: LoadState::Idle,
            defaults,
            draft,
            applied,
            visible: Arc::from(Vec::new()),
            filter_panel_open: false,
            cart: CartCounter::new(),
            skeleton_count: config.skeleton_count,
            price_slider_fallback: config.price_slider_fallback,
        }
    }

    /// Return the state that follows `event`.
    pub fn reduce(mut self, event: PageEvent) -> Self {
        match event {
            PageEvent::LoadStarted => {
                self.load = self.load.start();
            }
            PageEvent::LoadFinished(result) => {
                let was_loading = matches!(self.load, LoadState::Loading);
                self.load = self.load.finish(result);
                // A fresh catalog is shown unfiltered until the first apply.
                if was_loading {
                    self.visible = match &self.load {
                        LoadState::Loaded(catalog) => Arc::from(catalog.products()),
                        _ => Arc::from(Vec::new()),
                    };
                }
            }
            PageEvent::EditDraft(edit) => {
                self.draft = self.draft.edit(edit);
            }
            PageEvent::ResetDraft => {
                self.draft = DraftSelection::new(self.defaults.clone());
            }
            PageEvent::ApplyFilters => match self.load.catalog() {
                Some(catalog) => {
                    let applied = self.draft.commit();
                    self.visible = apply(catalog.products(), applied.selection()).into();
                    self.applied = applied;
                }
                None => debug!(state = self.load.name(), "apply ignored before catalog load"),
            },
            PageEvent::ToggleFilterPanel => {
                self.filter_panel_open = !self.filter_panel_open;
            }
            PageEvent::CloseFilterPanel => {
                self.filter_panel_open = false;
            }
            PageEvent::AddToCart => {
                self.cart = self.cart.add();
            }
        }
        self
    }

    /// What the product area shows right now.
    pub fn view(&self) -> PageView {
        match &self.load {
            LoadState::Idle | LoadState::Loading => PageView::Skeletons(self.skeleton_count),
            LoadState::Failed(e) => PageView::Failed(e.user_message()),
            LoadState::Loaded(_) if self.visible.is_empty() => PageView::Empty,
            LoadState::Loaded(_) => PageView::Products(Arc::clone(&self.visible)),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn draft(&self) -> &DraftSelection {
        &self.draft
    }

    pub fn applied(&self) -> &AppliedSelection {
        &self.applied
    }

    /// The visible products; empty until the catalog loads.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn is_filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    pub fn vocabulary(&self) -> Option<&FilterVocabulary> {
        self.load.catalog().map(Catalog::vocabulary)
    }

    /// Bounds of the price range control.
    pub fn price_slider(&self) -> PriceBounds {
        self.vocabulary()
            .map(|v| v.price_range)
            .unwrap_or(self.price_slider_fallback)
    }

    /// Category options for the category select, without "All".
    pub fn category_options(&self) -> Vec<String> {
        self.vocabulary()
            .map(|v| v.categories.clone())
            .unwrap_or_default()
    }

    /// Stock options for the stock select, without "All".
    pub fn stock_options(&self) -> Vec<String> {
        self.vocabulary()
            .map(|v| v.stock_availability.clone())
            .unwrap_or_default()
    }
}
