//! Listing Predicates and Orderings

use super::models::{FilterSpec, SortKey};
use crate::catalog::Product;
use std::cmp::Ordering;

/// Case-insensitive substring match against name, description or brand.
///
/// `needle` must already be lowercased; an empty needle matches everything.
pub fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || [&product.name, &product.description, &product.brand]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Category, price, brand and stock predicates, all of which must hold.
pub fn passes_filters(product: &Product, filters: &FilterSpec) -> bool {
    (filters.categories.is_empty() || filters.categories.contains(&product.category))
        && filters.price_range.contains(product.price)
        && (filters.brands.is_empty() || filters.brands.contains(&product.brand))
        && (!filters.in_stock_only || product.in_stock)
}

/// Comparator for `key`. Ties compare equal so a stable sort keeps input
/// order.
pub fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::PriceLow => numeric(a.price, b.price),
        SortKey::PriceHigh => numeric(b.price, a.price),
        SortKey::Rating => numeric(b.rating, a.rating),
        SortKey::Newest => b.id.cmp(&a.id),
        SortKey::Popular => b.review_count.cmp(&a.review_count),
    }
}

/// `0.0` and `-0.0` compare equal. NaN never reaches here; catalogs and
/// restored carts reject it.
fn numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::fixtures::product;

    #[test]
    fn search_checks_name_description_and_brand() {
        let mut p = product("1", 10.0);
        p.name = "Smart Fitness Watch".into();
        p.description = "Tracks heart rate".into();
        p.brand = "FitTech".into();

        assert!(matches_search(&p, "watch"));
        assert!(matches_search(&p, "heart"));
        assert!(matches_search(&p, "fittech"));
        assert!(matches_search(&p, ""));
        assert!(!matches_search(&p, "camera"));
    }

    #[test]
    fn search_ignores_category_and_tags() {
        let mut p = product("1", 10.0);
        p.category = "Electronics".into();
        p.tags = vec!["wireless".into()];
        assert!(!matches_search(&p, "electronics"));
        assert!(!matches_search(&p, "wireless"));
    }

    #[test]
    fn stock_filter_only_applies_when_set() {
        let mut p = product("1", 10.0);
        p.in_stock = false;

        let mut filters = FilterSpec::default();
        assert!(passes_filters(&p, &filters));

        filters.in_stock_only = true;
        assert!(!passes_filters(&p, &filters));
    }

    #[test]
    fn ties_compare_equal() {
        let a = product("1", 10.0);
        let b = product("2", 10.0);
        assert_eq!(compare(SortKey::PriceLow, &a, &b), Ordering::Equal);
        assert_eq!(compare(SortKey::Newest, &a, &b), Ordering::Greater);
    }

    #[test]
    fn signed_zero_prices_tie() {
        let a = product("a", 0.0);
        let b = product("b", -0.0);
        assert_eq!(compare(SortKey::PriceLow, &a, &b), Ordering::Equal);
        assert_eq!(compare(SortKey::PriceHigh, &b, &a), Ordering::Equal);
    }
}
