//! Catalog Listing Query
//!
//! Recomputed from scratch on every input change; nothing is cached.

use super::{
    helpers::{compare, matches_search, passes_filters},
    models::{FilterSpec, SortKey},
};
use crate::catalog::Product;

/// Filters `products` by search text and filters, then orders the survivors
/// by `sort`. Equal keys keep their input order.
pub fn query<'a>(
    products: &'a [Product],
    search_text: &str,
    filters: &FilterSpec,
    sort: SortKey,
) -> Vec<&'a Product> {
    let needle = search_text.to_lowercase();

    let mut matches: Vec<&Product> = products
        .iter()
        .filter(|p| matches_search(p, &needle) && passes_filters(p, filters))
        .collect();

    matches.sort_by(|a, b| compare(sort, a, b));

    tracing::trace!(
        search = search_text,
        sort = %sort,
        matched = matches.len(),
        total = products.len(),
        "catalog query"
    );

    matches
}
