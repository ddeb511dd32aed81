//! Product Detail View
//!
//! Everything the product page derives from the catalog and the cart for a
//! single product.

use crate::cart::{CartState, CartStore, KeyValueStore};
use crate::catalog::{Catalog, Product};

/// Derived view of one product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,

    /// Same-category products, excluding this one
    pub related: Vec<&'a Product>,

    /// Whole percent saved against the original price
    pub discount_percentage: i64,

    /// Units of this product already in the cart
    pub in_cart: u32,

    /// Quantity stepper value, never below 1
    selected_quantity: u32,
}

impl<'a> ProductDetail<'a> {
    /// Returns `None` for an unknown id; the caller sends the user back to
    /// the listing.
    pub fn build(
        catalog: &'a Catalog,
        product_id: &str,
        cart: &CartState,
        related_limit: usize,
    ) -> Option<Self> {
        let product = catalog.get(product_id)?;

        Some(Self {
            product,
            related: catalog.related(product, related_limit),
            discount_percentage: product.discount_percentage(),
            in_cart: cart.quantity_of(product_id),
            selected_quantity: 1,
        })
    }

    pub fn selected_quantity(&self) -> u32 {
        self.selected_quantity
    }

    pub fn increment(&mut self) {
        self.selected_quantity = self.selected_quantity.saturating_add(1);
    }

    /// Steps down, stopping at 1.
    pub fn decrement(&mut self) {
        self.selected_quantity = self.selected_quantity.saturating_sub(1).max(1);
    }

    /// Price of `quantity` units.
    pub fn line_price(&self, quantity: u32) -> f64 {
        self.product.line_price(quantity)
    }

    /// Price shown on the add-to-cart button.
    pub fn selected_line_price(&self) -> f64 {
        self.line_price(self.selected_quantity)
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.product.in_stock
    }

    /// Adds the selected quantity when the product is in stock. Returns
    /// whether the cart was touched.
    pub fn add_to_cart<S: KeyValueStore>(&mut self, cart: &mut CartStore<S>) -> bool {
        let quantity = self.selected_quantity;
        if !self.can_add_to_cart() {
            tracing::debug!(product_id = %self.product.id, quantity, "add to cart refused");
            return false;
        }

        cart.add(self.product, quantity);
        self.in_cart = cart.quantity_of(&self.product.id);
        true
    }
}
