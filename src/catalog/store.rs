//! Catalog Loading and Lookup
//!
//! The catalog is read once and never refreshed. Category and brand
//! enumerations are derived at load time in first-appearance order.

use super::models::Product;
use crate::error::CatalogError;
use std::collections::HashSet;

/// Six-product mock catalog shipped with the crate
const DEMO_CATALOG: &str = include_str!("products.json");

/// Read-only product list plus its derived enumerations
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    brands: Vec<String>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range numbers.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            product
                .validate()
                .map_err(|reason| CatalogError::InvalidProduct {
                    id: product.id.clone(),
                    reason: reason.to_string(),
                })?;
        }

        let categories = distinct(products.iter().map(|p| p.category.as_str()));
        let brands = distinct(products.iter().map(|p| p.brand.as_str()));

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            brands = brands.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
            brands,
        })
    }

    /// Parses a JSON array of products.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    /// The embedded mock catalog.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Other products in the same category, in catalog order, at most `limit`.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
