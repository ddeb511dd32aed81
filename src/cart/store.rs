//! Shopping Cart Store
//!
//! Owns the cart state for one session and keeps it mirrored in a single
//! storage slot. Restore failures fall back to an empty cart and write
//! failures are logged; neither reaches the caller.

use super::{
    helpers::format_item_summary,
    models::{CartLineItem, CartState},
    storage::KeyValueStore,
};
use crate::catalog::Product;
use crate::config::StorefrontConfig;
use crate::error::PersistenceError;

/// Cart state bound to one slot of a storage backend
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    key: String,
    state: CartState,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Opens the cart stored under the configured key.
    pub fn open(storage: S, config: &StorefrontConfig) -> Self {
        Self::with_key(storage, config.cart_storage_key.clone())
    }

    /// Opens the cart stored under `key`, starting empty if the slot is
    /// missing or unusable. The slot itself is left as it was.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let state = match restore(&storage, &key) {
            Ok(Some(state)) => {
                tracing::debug!(
                    key = %key,
                    items = state.items().len(),
                    item_count = state.item_count(),
                    "restored cart"
                );
                state
            }
            Ok(None) => {
                tracing::debug!(key = %key, "no saved cart, starting empty");
                CartState::default()
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "error loading cart, starting empty");
                CartState::default()
            }
        };

        Self {
            storage,
            key,
            state,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// A zero quantity changes nothing and writes nothing.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if !self.state.add(product, quantity) {
            tracing::debug!(product_id = %product.id, "ignoring add of zero quantity");
            return;
        }
        self.persist();
    }

    /// Adds a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) {
        self.add(product, 1);
    }

    /// Removes the line for `product_id`; absent ids are ignored.
    pub fn remove(&mut self, product_id: &str) {
        self.state.remove(product_id);
        self.persist();
    }

    /// Sets the exact quantity of an existing line; 0 removes it.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        self.state.set_quantity(product_id, quantity);
        self.persist();
    }

    /// Empties the cart and writes the empty state back.
    pub fn clear(&mut self) {
        self.state.clear();
        self.persist();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Whether `product_id` has a line in the cart.
    pub fn contains(&self, product_id: &str) -> bool {
        self.state.contains(product_id)
    }

    /// Units of `product_id` in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.state.quantity_of(product_id)
    }

    /// Sum of quantities, as shown on the cart badge.
    pub fn total_item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> f64 {
        self.state.total()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    /// Snapshot of the full cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// One-line description of the cart contents, e.g. `"2x Lamp, 1x Desk"`.
    pub fn summary(&self) -> String {
        format_item_summary(self.state.items())
    }

    /// Storage slot this cart is mirrored to.
    pub fn key(&self) -> &str {
        &self.key
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// Writes the full state back to the slot. Failures are logged and the
    /// in-memory state stays authoritative.
    fn persist(&self) {
        if let Err(err) = self.try_persist() {
            tracing::warn!(key = %self.key, error = %err, "failed to save cart");
        }
    }

    fn try_persist(&self) -> Result<(), PersistenceError> {
        let blob = self.state.to_blob()?;
        self.storage
            .set_item(&self.key, &blob)
            .map_err(PersistenceError::Write)
    }
}

fn restore<S: KeyValueStore>(
    storage: &S,
    key: &str,
) -> Result<Option<CartState>, PersistenceError> {
    match storage.get_item(key).map_err(PersistenceError::Read)? {
        Some(raw) => CartState::from_blob(&raw).map(Some),
        None => Ok(None),
    }
}
