//! Page components.

mod cart_badge;
mod filter_panel;
mod product;
mod scroll;

pub use cart_badge::CartBadge;
pub use filter_panel::{FilterPanel, FilterToggle};
pub use product::ProductGrid;
pub use scroll::ScrollToTop;
