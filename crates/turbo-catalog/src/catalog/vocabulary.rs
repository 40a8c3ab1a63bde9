//! Filter vocabulary shipped with the catalog.

use serde::{Deserialize, Serialize};

/// The legal filter choices offered by the filter controls.
///
/// Comes from the catalog document rather than being derived from products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterVocabulary {
    /// Distinct category labels.
    pub categories: Vec<String>,
    /// Bounds for the price range control.
    pub price_range: PriceBounds,
    /// Stock-state labels, e.g. "In Stock" and "Out of Stock".
    pub stock_availability: Vec<String>,
}

impl FilterVocabulary {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.price_range.is_valid() {
            return Err(format!(
                "price range {}..{} is not an ordered finite range",
                self.price_range.min, self.price_range.max
            ));
        }
        Ok(())
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Create bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if `price` lies within the bounds, inclusive at both ends.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Check both ends are finite and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::new(0.0, 300.0)
    }
}

impl From<[f64; 2]> for PriceBounds {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = PriceBounds::new(10.0, 100.0);
        assert!(bounds.contains(10.0));
        assert!(bounds.contains(100.0));
        assert!(!bounds.contains(100.01));
        assert!(!bounds.contains(9.99));
    }

    #[test]
    fn test_inverted_bounds_contain_nothing() {
        let bounds = PriceBounds::new(100.0, 10.0);
        assert!(!bounds.is_valid());
        assert!(!bounds.contains(50.0));
    }

    #[test]
    fn test_vocabulary_field_names() {
        let json = r#"{
            "categories": ["Toys"],
            "priceRange": { "min": 5, "max": 50 },
            "stockAvailability": ["In Stock"],
            "brands": ["ignored"]
        }"#;
        let vocabulary: FilterVocabulary = serde_json::from_str(json).unwrap();
        assert_eq!(vocabulary.categories, vec!["Toys"]);
        assert_eq!(vocabulary.price_range, PriceBounds::new(5.0, 50.0));
        assert_eq!(vocabulary.stock_availability, vec!["In Stock"]);
    }
}
