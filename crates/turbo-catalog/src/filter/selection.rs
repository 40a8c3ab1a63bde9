//! Filter selection types.
//!
//! Edits go to a [`DraftSelection`]; only committing it produces the
//! [`AppliedSelection`] the visible list is computed from.

use crate::catalog::{PriceBounds, StockState};
use serde::{Deserialize, Serialize};

/// The shopper's filter choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    /// Exact category to keep; empty means no category filter.
    pub category: String,
    /// Inclusive `[low, high]` price bounds. Always applied.
    pub price_range: [f64; 2],
    /// Minimum whole-star rating; zero means no rating filter.
    pub rating: f64,
    /// Stock-state label; empty means no stock filter.
    pub stock: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::with_price_range(PriceBounds::default())
    }
}

impl FilterSelection {
    /// A selection with no filters other than the given price bounds.
    pub fn with_price_range(bounds: PriceBounds) -> Self {
        Self {
            category: String::new(),
            price_range: [bounds.min, bounds.max],
            rating: 0.0,
            stock: String::new(),
        }
    }

    /// The price bounds as a range value.
    pub fn price_bounds(&self) -> PriceBounds {
        PriceBounds::from(self.price_range)
    }

    /// The category filter, if one is set.
    pub fn category_filter(&self) -> Option<&str> {
        (!self.category.is_empty()).then_some(self.category.as_str())
    }

    /// The rating threshold, if one is set.
    pub fn rating_filter(&self) -> Option<f64> {
        (self.rating > 0.0).then_some(self.rating)
    }

    /// Interpret the stock label.
    pub fn stock_filter(&self) -> StockFilter {
        StockFilter::from_label(&self.stock)
    }
}

/// The interpreted stock label of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFilter {
    /// No stock filter.
    Any,
    /// Keep products in this state.
    Only(StockState),
    /// A label that names no stock state; matches nothing.
    Unmatched,
}

impl StockFilter {
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() {
            return StockFilter::Any;
        }
        StockState::from_label(label)
            .map(StockFilter::Only)
            .unwrap_or(StockFilter::Unmatched)
    }

    /// Check if a product in `state` passes this filter.
    pub fn accepts(&self, state: StockState) -> bool {
        match self {
            StockFilter::Any => true,
            StockFilter::Only(wanted) => *wanted == state,
            StockFilter::Unmatched => false,
        }
    }
}

/// A single change to the draft selection, one per filter control.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEdit {
    /// Category select; empty is "All".
    Category(String),
    /// Range slider; moves the upper price bound only.
    PriceCeiling(f64),
    /// Replace both price bounds.
    PriceRange(PriceBounds),
    /// Minimum rating input. Non-finite input clears the filter.
    Rating(f64),
    /// Stock select; empty is "All".
    Stock(String),
}

/// The selection being edited in the filter panel. Has no effect on the
/// visible list until committed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftSelection(FilterSelection);

impl DraftSelection {
    pub fn new(selection: FilterSelection) -> Self {
        Self(selection)
    }

    /// Return the draft with one edit applied.
    pub fn edit(self, edit: FilterEdit) -> Self {
        let mut selection = self.0;
        match edit {
            FilterEdit::Category(category) => selection.category = category,
            FilterEdit::PriceCeiling(max) => selection.price_range[1] = max,
            FilterEdit::PriceRange(bounds) => selection.price_range = [bounds.min, bounds.max],
            FilterEdit::Rating(rating) => {
                selection.rating = if rating.is_finite() { rating } else { 0.0 };
            }
            FilterEdit::Stock(stock) => selection.stock = stock,
        }
        Self(selection)
    }

    /// Freeze the draft into the selection the visible list is built from.
    pub fn commit(&self) -> AppliedSelection {
        AppliedSelection(self.0.clone())
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.0
    }
}

/// The selection the visible list was last computed from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppliedSelection(FilterSelection);

impl AppliedSelection {
    pub fn selection(&self) -> &FilterSelection {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = FilterSelection::default();
        assert_eq!(selection.category_filter(), None);
        assert_eq!(selection.price_range, [0.0, 300.0]);
        assert_eq!(selection.rating_filter(), None);
        assert_eq!(selection.stock_filter(), StockFilter::Any);
    }

    #[test]
    fn test_stock_filter_labels() {
        assert_eq!(
            StockFilter::from_label("In Stock"),
            StockFilter::Only(StockState::InStock)
        );
        assert_eq!(StockFilter::from_label("Backorder"), StockFilter::Unmatched);
        assert!(!StockFilter::Unmatched.accepts(StockState::InStock));
        assert!(!StockFilter::Unmatched.accepts(StockState::OutOfStock));
    }

    #[test]
    fn test_draft_edits() {
        let draft = DraftSelection::default()
            .edit(FilterEdit::Category("Audio".into()))
            .edit(FilterEdit::PriceCeiling(120.0))
            .edit(FilterEdit::Rating(4.0))
            .edit(FilterEdit::Stock("In Stock".into()));

        let selection = draft.selection();
        assert_eq!(selection.category, "Audio");
        assert_eq!(selection.price_range, [0.0, 120.0]);
        assert_eq!(selection.rating, 4.0);
        assert_eq!(selection.stock, "In Stock");
    }

    #[test]
    fn test_non_finite_rating_clears_filter() {
        let draft = DraftSelection::default().edit(FilterEdit::Rating(f64::NAN));
        assert_eq!(draft.selection().rating_filter(), None);
    }

    #[test]
    fn test_commit_snapshots_the_draft() {
        let draft = DraftSelection::default().edit(FilterEdit::Category("Home".into()));
        let applied = draft.commit();
        let draft = draft.edit(FilterEdit::Category("Audio".into()));

        assert_eq!(applied.selection().category, "Home");
        assert_eq!(draft.selection().category, "Audio");
    }
}
