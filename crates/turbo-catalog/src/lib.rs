//! Catalog and filtering logic for the Shopfront storefront page.
//!
//! This crate holds everything the page does that is not rendering:
//!
//! - **Catalog**: products and the filter vocabulary parsed from the static
//!   catalog resource
//! - **Filter**: draft/applied selections and the filter engine
//! - **Store**: the one-shot catalog load and its `Idle -> Loading -> Loaded | Failed`
//!   state machine
//! - **Page**: the immutable page snapshot and the events that replace it
//!
//! # Example
//!
//! ```rust
//! use turbo_catalog::prelude::*;
//!
//! let catalog = Catalog::from_json(r#"{
//!     "products": [
//!         { "id": 1, "name": "Mug", "description": "", "image": "mug.png",
//!           "price": 12.5, "category": "Kitchen", "rating": 4.2, "stock": 3 }
//!     ],
//!     "filters": {
//!         "categories": ["Kitchen"],
//!         "priceRange": { "min": 0, "max": 300 },
//!         "stockAvailability": ["In Stock", "Out of Stock"]
//!     }
//! }"#).unwrap();
//!
//! let mut selection = FilterSelection::default();
//! selection.stock = "In Stock".to_string();
//!
//! let visible = apply(catalog.products(), &selection);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod page;
pub mod store;

pub use error::{ConfigError, LoadError};
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, LoadError};
    pub use crate::ids::ProductId;

    pub use crate::cart::CartCounter;
    pub use crate::catalog::{Catalog, FilterVocabulary, PriceBounds, Product, StockState};
    pub use crate::config::StorefrontConfig;
    pub use crate::filter::{
        apply, matches, AppliedSelection, DraftSelection, FilterEdit, FilterSelection,
        StockFilter,
    };
    pub use crate::page::{PageEvent, PageState, PageView};
    pub use crate::store::{load, CatalogSource, FetchResponse, LoadState};
}
