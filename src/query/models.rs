//! Catalog Query Models
//!
//! Filter and sort inputs for the listing, as edited by the filter sidebar
//! and the sort selector.

use crate::config::DEFAULT_MAX_PRICE;
use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price bounds; `low <= high` always holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PriceRange {
    low: f64,
    high: f64,
}

impl PriceRange {
    /// Builds a range, swapping the bounds if they arrive reversed.
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    /// `[0, max]`
    pub fn up_to(max: f64) -> Self {
        Self::new(0.0, max)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }

    /// True when this range excludes part of `full`.
    pub fn narrows(&self, full: &PriceRange) -> bool {
        self.low > full.low || self.high < full.high
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(DEFAULT_MAX_PRICE)
    }
}

impl From<(f64, f64)> for PriceRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

impl From<PriceRange> for (f64, f64) {
    fn from(range: PriceRange) -> Self {
        (range.low, range.high)
    }
}

// =============================================================================
// Filter Spec
// =============================================================================

/// Conjunction of listing filters. Empty selections do not filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub brands: BTreeSet<String>,
    pub in_stock_only: bool,
}

impl FilterSpec {
    /// Defaults with the price range opened up to `max_price`.
    pub fn with_max_price(max_price: f64) -> Self {
        Self {
            price_range: PriceRange::up_to(max_price),
            ..Self::default()
        }
    }

    /// Checks or unchecks a category box.
    pub fn toggle_category(&mut self, category: &str, checked: bool) {
        toggle(&mut self.categories, category, checked);
    }

    /// Checks or unchecks a brand box.
    pub fn toggle_brand(&mut self, brand: &str, checked: bool) {
        toggle(&mut self.brands, brand, checked);
    }

    pub fn set_price_range(&mut self, low: f64, high: f64) {
        self.price_range = PriceRange::new(low, high);
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.in_stock_only = in_stock_only;
    }

    /// Clears every filter, reopening the price range to `full`.
    pub fn reset(&mut self, full: PriceRange) {
        *self = Self {
            price_range: full,
            ..Self::default()
        };
    }

    /// Number of filter dimensions currently narrowing the listing, counting
    /// the price range as active when it is narrower than `full`.
    pub fn active_count(&self, full: &PriceRange) -> usize {
        [
            !self.categories.is_empty(),
            !self.brands.is_empty(),
            self.in_stock_only,
            self.price_range.narrows(full),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str, checked: bool) {
    if checked {
        set.insert(value.to_string());
    } else {
        set.remove(value);
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending price
    PriceLow,
    /// Descending price
    PriceHigh,
    /// Descending rating
    Rating,
    /// Descending id; there is no creation date to sort on
    Newest,
    /// Descending review count
    #[default]
    Popular,
}

impl SortKey {
    /// In the order the sort selector lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Popular,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
        }
    }

    /// Label shown in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
            SortKey::Popular => "Most Popular",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}
