//! Storefront Configuration
//!
//! Constants shared by the cart and the listing, plus the small set of knobs
//! a host application may override from a JSON document.

use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Storage key the cart blob lives under
pub const CART_STORAGE_KEY: &str = "ecommerce_cart";
/// Upper bound of the price slider on the listing page
pub const DEFAULT_MAX_PRICE: f64 = 2000.0;
/// How many related products the detail view shows
pub const DEFAULT_RELATED_LIMIT: usize = 4;
/// Current layout version of the persisted cart blob
pub const CART_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Configuration
// =============================================================================

/// Runtime configuration for a storefront session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorefrontConfig {
    /// Key of the single slot the cart is persisted to
    pub cart_storage_key: String,

    /// Full price range upper bound; a filter narrower than `[0, max_price]`
    /// counts as an active filter
    pub max_price: f64,

    /// Maximum number of related products on the detail view
    pub related_limit: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_storage_key: CART_STORAGE_KEY.to_string(),
            max_price: DEFAULT_MAX_PRICE,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl StorefrontConfig {
    /// Parses a configuration document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(StorefrontError::Config)
    }
}
