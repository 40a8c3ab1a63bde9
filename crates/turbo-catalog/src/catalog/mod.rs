//! Product catalog module.
//!
//! Contains the product type, the filter vocabulary and the loaded catalog.

mod document;
mod product;
mod vocabulary;

pub use document::Catalog;
pub use product::{Product, StockState};
pub use vocabulary::{FilterVocabulary, PriceBounds};
