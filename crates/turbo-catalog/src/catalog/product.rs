//! Product types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier, stable across renders.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description shown on the card.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Unit price, never negative.
    pub price: f64,
    /// Category label from the catalog's category set.
    pub category: String,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Units on hand; zero means out of stock.
    pub stock: u32,
}

impl Product {
    /// Check if at least one unit is on hand.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock state used by the stock filter.
    pub fn stock_state(&self) -> StockState {
        if self.is_in_stock() {
            StockState::InStock
        } else {
            StockState::OutOfStock
        }
    }

    /// Rating truncated toward zero, as compared by the rating filter.
    pub fn whole_stars(&self) -> f64 {
        self.rating.trunc()
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Check the numeric fields are in range.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("product {} has invalid price {}", self.id, self.price));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(format!("product {} has rating {} outside [0, 5]", self.id, self.rating));
        }
        Ok(())
    }
}

/// Whether a product can currently be bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockState {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockState {
    /// Label used in the catalog's `stockAvailability` list.
    pub fn label(&self) -> &'static str {
        match self {
            StockState::InStock => "In Stock",
            StockState::OutOfStock => "Out of Stock",
        }
    }

    /// Parse a stock label. Labels are matched exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "In Stock" => Some(StockState::InStock),
            "Out of Stock" => Some(StockState::OutOfStock),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, rating: f64, stock: u32) -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            image: "lamp.png".to_string(),
            price,
            category: "Home".to_string(),
            rating,
            stock,
        }
    }

    #[test]
    fn test_stock_state() {
        assert_eq!(product(10.0, 4.0, 3).stock_state(), StockState::InStock);
        assert_eq!(product(10.0, 4.0, 0).stock_state(), StockState::OutOfStock);
    }

    #[test]
    fn test_whole_stars_truncates() {
        assert_eq!(product(10.0, 3.9, 1).whole_stars(), 3.0);
        assert_eq!(product(10.0, 4.0, 1).whole_stars(), 4.0);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(product(9.5, 4.0, 1).price_display(), "$9.50");
    }

    #[test]
    fn test_validate() {
        assert!(product(0.0, 0.0, 0).validate().is_ok());
        assert!(product(-1.0, 4.0, 1).validate().is_err());
        assert!(product(10.0, 5.5, 1).validate().is_err());
    }

    #[test]
    fn test_stock_labels() {
        assert_eq!(StockState::from_label("In Stock"), Some(StockState::InStock));
        assert_eq!(StockState::from_label("in stock"), None);
        assert_eq!(StockState::OutOfStock.label(), "Out of Stock");
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let json = r#"{"id":1,"name":"a","description":"","image":"","price":1,
            "category":"c","rating":1,"stock":-2}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
