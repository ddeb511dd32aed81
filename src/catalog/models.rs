//! Catalog Domain Models
//!
//! This module contains the product record the rest of the crate works on.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A purchasable product, as supplied by the catalog document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (also the cart line item id)
    pub id: String,

    /// Display name
    pub name: String,

    /// Current price
    pub price: f64,

    /// Price before discount, when the product is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,

    /// Long-form description, searched by the listing
    pub description: String,

    /// Image URLs, first one is the hero image
    #[serde(default)]
    pub images: Vec<String>,

    /// Category name
    pub category: String,

    /// Brand name
    pub brand: String,

    /// Average rating, 0 to 5
    pub rating: f64,

    /// Number of reviews the rating is based on
    pub review_count: u32,

    /// Whether the product can currently be ordered
    pub in_stock: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Checks the numeric fields a listing or cart total depends on.
    ///
    /// Returns the reason on failure.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price must be a non-negative number");
        }
        if let Some(original) = self.original_price {
            if !original.is_finite() || original < 0.0 {
                return Err("original price must be a non-negative number");
            }
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err("rating must lie between 0 and 5");
        }
        Ok(())
    }

    /// Percentage saved against the original price, rounded to the nearest
    /// whole percent. Zero when the product is not on sale.
    pub fn discount_percentage(&self) -> i64 {
        match self.original_price {
            Some(original) if original > 0.0 => {
                // Round half up, matching the price badges shown elsewhere.
                ((1.0 - self.price / original) * 100.0 + 0.5).floor() as i64
            }
            _ => 0,
        }
    }

    /// Price of `quantity` units.
    pub fn line_price(&self, quantity: u32) -> f64 {
        self.price * f64::from(quantity)
    }

    /// Whole stars to fill in a five-star rating display.
    pub fn filled_stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }
}
