//! Page configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::PriceBounds;
use crate::error::ConfigError;

/// Storefront page configuration.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// URL of the static catalog resource.
    pub catalog_url: String,
    /// Skeleton cards shown while the catalog size is unknown.
    pub skeleton_count: usize,
    /// Price bounds of a fresh selection.
    pub default_price_range: [f64; 2],
    /// Range slider bounds until the catalog vocabulary is loaded.
    pub price_slider_fallback: PriceBounds,
    /// How long the add-to-cart ripple stays visible, in milliseconds.
    pub ripple_ms: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: "./products.json".to_string(),
            skeleton_count: 10,
            default_price_range: [0.0, 300.0],
            price_slider_fallback: PriceBounds::new(0.0, 300.0),
            ripple_ms: 600,
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "catalog_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.skeleton_count == 0 {
            return Err(ConfigError::Invalid {
                field: "skeleton_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if !PriceBounds::from(self.default_price_range).is_valid() {
            return Err(ConfigError::Invalid {
                field: "default_price_range",
                reason: format!("{:?} is not an ordered finite range", self.default_price_range),
            });
        }
        if !self.price_slider_fallback.is_valid() {
            return Err(ConfigError::Invalid {
                field: "price_slider_fallback",
                reason: format!("{:?} is not an ordered finite range", self.price_slider_fallback),
            });
        }
        Ok(())
    }

    /// Price bounds of a fresh selection.
    pub fn default_price_bounds(&self) -> PriceBounds {
        PriceBounds::from(self.default_price_range)
    }
}
