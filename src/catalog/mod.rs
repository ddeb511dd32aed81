//! Catalog Domain Module
//!
//! The read-only product list the storefront sells from:
//! - Product model and per-product derived values
//! - Catalog loading, validation and lookup
//! - Display helpers

pub mod helpers;
pub mod models;
pub mod store;

pub use helpers::format_price;
pub use models::Product;
pub use store::Catalog;
