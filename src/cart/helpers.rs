//! Shopping Cart Business Logic Helpers
//!
//! This module contains the aggregate computations and formatting used by
//! the cart state and store.

use super::models::CartLineItem;

/// Sum of price times quantity, folded in line order.
pub fn total_of(items: &[CartLineItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + item.subtotal())
}

/// Sum of quantities.
pub fn item_count_of(items: &[CartLineItem]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity)).sum()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Smart Fitness Watch, 1x Wireless Phone Charger"`.
pub fn format_item_summary(items: &[CartLineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}
