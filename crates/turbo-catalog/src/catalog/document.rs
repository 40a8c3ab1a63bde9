//! The loaded catalog and its wire document.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use crate::catalog::{FilterVocabulary, Product};
use crate::error::LoadError;

/// Shape of the static catalog resource. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
    filters: FilterVocabulary,
}

/// The full, unfiltered product list plus its filter vocabulary.
///
/// Immutable once built; clones share the underlying data.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
    vocabulary: Arc<FilterVocabulary>,
}

impl Catalog {
    /// Build a catalog, rejecting out-of-range fields and duplicate ids.
    pub fn new(products: Vec<Product>, vocabulary: FilterVocabulary) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate().map_err(LoadError::Malformed)?;
            if !seen.insert(&product.id) {
                return Err(LoadError::Malformed(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        vocabulary.validate().map_err(LoadError::Malformed)?;

        Ok(Self {
            products: products.into(),
            vocabulary: Arc::new(vocabulary),
        })
    }

    /// Parse a catalog from the body of the catalog resource.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        let document: CatalogDocument = serde_json::from_str(body)?;
        Self::new(document.products, document.filters)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The filter vocabulary.
    pub fn vocabulary(&self) -> &FilterVocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
