//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLineItem, CartState, persisted layout)
//! - Aggregate and formatting helpers
//! - Key-value storage backends
//! - The session cart store

pub mod helpers;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CartLineItem, CartState};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use store::CartStore;
