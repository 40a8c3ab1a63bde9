//! The filter engine.
//!
//! Filters are independent optional predicates joined by AND. Every call
//! starts again from the full catalog, so relaxing a filter can bring back
//! products an earlier, stricter selection hid.

use tracing::debug;

use crate::catalog::Product;
use crate::filter::FilterSelection;

/// Check a single product against every predicate of `selection`.
pub fn matches(product: &Product, selection: &FilterSelection) -> bool {
    if let Some(category) = selection.category_filter() {
        if product.category != category {
            return false;
        }
    }

    if !selection.price_bounds().contains(product.price) {
        return false;
    }

    if let Some(min_rating) = selection.rating_filter() {
        if product.whole_stars() < min_rating {
            return false;
        }
    }

    selection.stock_filter().accepts(product.stock_state())
}

/// Compute the visible products for `selection`, in catalog order.
///
/// Never fails: a selection nothing satisfies yields an empty list.
pub fn apply(catalog: &[Product], selection: &FilterSelection) -> Vec<Product> {
    let visible: Vec<Product> = catalog
        .iter()
        .filter(|product| matches(product, selection))
        .cloned()
        .collect();

    debug!(
        catalog = catalog.len(),
        visible = visible.len(),
        "applied filters"
    );
    visible
}
