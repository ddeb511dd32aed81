//! Storefront Library
//!
//! This library provides the client-side logic of a small storefront: a
//! searchable, filterable catalog listing, a product detail view, and a
//! shopping cart persisted to a single key-value slot.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod detail;
pub mod query;

// Infrastructure
pub mod config;
pub mod error;
pub mod observability;

pub use cart::{CartLineItem, CartState, CartStore, FileStorage, KeyValueStore, MemoryStorage};
pub use catalog::{format_price, Catalog, Product};
pub use config::StorefrontConfig;
pub use detail::ProductDetail;
pub use error::{Result, StorefrontError};
pub use query::{query, FilterSpec, PriceRange, SortKey};
