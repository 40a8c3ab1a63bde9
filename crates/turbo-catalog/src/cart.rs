//! Cart counter shown in the page header.

use serde::{Deserialize, Serialize};

/// Number of add-to-cart clicks this page lifetime.
///
/// Only a counter: no line items and no stock checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCounter(u32);

impl CartCounter {
    pub fn new() -> Self {
        Self(0)
    }

    /// Return the counter after one more add-to-cart click.
    pub fn add(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}
