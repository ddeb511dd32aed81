//! Shopping Cart Domain Models
//!
//! This module contains the cart line item, the cart state with its derived
//! aggregates, and the versioned envelope the state is persisted in.

use super::helpers::{item_count_of, total_of};
use crate::catalog::Product;
use crate::config::CART_SCHEMA_VERSION;
use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One entry in the cart: a product snapshot and how many of it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Same as `product.id`; at most one line item per product
    pub id: String,

    /// Product as it was when first added
    pub product: Product,

    /// Always at least 1
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            product,
            quantity,
        }
    }

    /// Price of this line (unit price times quantity).
    pub fn subtotal(&self) -> f64 {
        self.product.line_price(self.quantity)
    }
}

/// Cart contents in insertion order, plus aggregates derived from them.
///
/// `total` and `item_count` are recomputed on every mutation and are never
/// set independently of `items`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartLineItem>,
    total: f64,
    item_count: u64,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0.0,
            item_count: 0,
        }
    }
}

impl CartState {
    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of price times quantity over all line items.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum of quantities over all line items.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// True when there are no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line item for `product_id`, if present.
    pub fn get(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Whether `product_id` has a line.
    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Units of `product_id`, 0 when absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.get(product_id).map_or(0, |item| item.quantity)
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    ///
    /// Returns `false` and leaves the state untouched when `quantity` is 0.
    pub fn add(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartLineItem::new(product.clone(), quantity));
        }

        self.recompute();
        true
    }

    /// Drops the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        self.recompute();
        self.items.len() != before
    }

    /// Sets the quantity of an existing line; 0 removes it.
    ///
    /// Never creates a line. Returns whether anything changed.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }

        let changed = match self.items.iter_mut().find(|i| i.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        };

        self.recompute();
        changed
    }

    /// Drops every line; aggregates return to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.total = total_of(&self.items);
        self.item_count = item_count_of(&self.items);
    }

    /// Builds a state from line items, enforcing the cart invariants.
    pub fn from_items(items: Vec<CartLineItem>) -> Result<Self, PersistenceError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.quantity == 0 {
                return Err(PersistenceError::Invalid(format!(
                    "line item {} has zero quantity",
                    item.id
                )));
            }
            if item.id != item.product.id {
                return Err(PersistenceError::Invalid(format!(
                    "line item {} holds product {}",
                    item.id, item.product.id
                )));
            }
            if let Err(reason) = item.product.validate() {
                return Err(PersistenceError::Invalid(format!(
                    "line item {}: {}",
                    item.id, reason
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(PersistenceError::Invalid(format!(
                    "duplicate line item {}",
                    item.id
                )));
            }
        }

        let mut state = Self {
            items,
            ..Self::default()
        };
        state.recompute();
        Ok(state)
    }

    /// Serializes the state into the versioned storage layout.
    pub fn to_blob(&self) -> Result<String, PersistenceError> {
        let envelope = PersistedCartRef {
            version: CART_SCHEMA_VERSION,
            state: self,
        };
        serde_json::to_string(&envelope).map_err(PersistenceError::Serialize)
    }

    /// Parses and validates a stored blob.
    ///
    /// Blobs without a `version` field predate versioning and are read as
    /// version 0. Stored aggregates are ignored in favour of values
    /// recomputed from the items.
    pub fn from_blob(raw: &str) -> Result<Self, PersistenceError> {
        let stored: PersistedCart = serde_json::from_str(raw).map_err(PersistenceError::Parse)?;

        if stored.version > CART_SCHEMA_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: stored.version,
                supported: CART_SCHEMA_VERSION,
            });
        }

        let state = Self::from_items(stored.items)?;

        let total_drift = stored.total.map(|t| (t - state.total).abs() > 1e-6);
        let count_drift = stored.item_count.map(|c| c != state.item_count);
        if total_drift == Some(true) || count_drift == Some(true) {
            tracing::warn!(
                stored_total = ?stored.total,
                stored_item_count = ?stored.item_count,
                total = state.total,
                item_count = state.item_count,
                "stored cart aggregates disagree with items, using recomputed values"
            );
        }

        Ok(state)
    }
}

// =============================================================================
// Persisted Layout
// =============================================================================

/// Outgoing storage envelope
#[derive(Serialize)]
struct PersistedCartRef<'a> {
    version: u32,

    #[serde(flatten)]
    state: &'a CartState,
}

/// Incoming storage envelope; tolerant of the unversioned layout
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedCart {
    #[serde(default)]
    version: u32,

    items: Vec<CartLineItem>,

    #[serde(default)]
    total: Option<f64>,

    #[serde(default)]
    item_count: Option<u64>,
}
