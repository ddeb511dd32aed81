//! Catalog Query Module
//!
//! Search, filter and sort over the fixed product list:
//! - Filter/sort inputs (FilterSpec, PriceRange, SortKey)
//! - Per-product predicates and comparators
//! - The `query` entry point

pub mod helpers;
pub mod listing;
pub mod models;

pub use listing::query;
pub use models::{FilterSpec, PriceRange, SortKey};
