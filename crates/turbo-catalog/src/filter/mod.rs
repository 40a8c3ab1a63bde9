//! Filter module.
//!
//! Contains the filter selection types and the engine that applies them.

mod engine;
mod selection;

pub use engine::{apply, matches};
pub use selection::{AppliedSelection, DraftSelection, FilterEdit, FilterSelection, StockFilter};
