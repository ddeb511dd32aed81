//! Integration tests for the storefront
//!
//! These tests drive the public API the way the pages do:
//! - Listing queries over the mock catalog
//! - Cart mutations and their persisted slot
//! - Restoring a session from disk
//! - The product detail view

use serde_json::Value;
use storefront::{
    format_price, query, CartState, CartStore, Catalog, FileStorage, FilterSpec, KeyValueStore,
    MemoryStorage, PriceRange, ProductDetail, SortKey, StorefrontConfig,
};

/// Helper function to load the mock catalog
fn demo_catalog() -> Catalog {
    Catalog::demo().expect("embedded catalog must load")
}

/// Helper function to read the persisted slot as JSON
fn saved_slot(storage: &impl KeyValueStore, key: &str) -> Value {
    let raw = storage.get_item(key).unwrap().expect("slot should be written");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_listing_price_low_returns_all_in_ascending_order() {
    let catalog = demo_catalog();

    let listed = query(catalog.products(), "", &FilterSpec::default(), SortKey::PriceLow);

    assert_eq!(listed.len(), 6);
    assert_eq!(listed.first().unwrap().name, "Wireless Phone Charger");
    assert_eq!(format_price(listed.first().unwrap().price), "$39.99");
    assert_eq!(listed.last().unwrap().name, "Professional Camera Lens");
    assert_eq!(format_price(listed.last().unwrap().price), "$1299.99");
    assert!(listed.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn test_listing_in_stock_only_drops_the_keyboard() {
    let catalog = demo_catalog();
    let mut filters = FilterSpec::default();
    filters.set_in_stock_only(true);

    let listed = query(catalog.products(), "", &filters, SortKey::Popular);

    assert_eq!(listed.len(), 5);
    assert!(listed.iter().all(|p| p.in_stock));
    assert!(listed.iter().all(|p| p.name != "Gaming Mechanical Keyboard"));
}

#[test]
fn test_listing_from_ui_inputs() {
    let catalog = demo_catalog();
    let config = StorefrontConfig::default();

    let filters: FilterSpec =
        serde_json::from_str(r#"{"categories":["Electronics"],"priceRange":[0,250]}"#).unwrap();
    let sort: SortKey = "price-high".parse().unwrap();

    let listed = query(catalog.products(), "tech", &filters, sort);
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, ["Smart Fitness Watch", "Gaming Mechanical Keyboard"]);
    assert_eq!(
        filters.active_count(&PriceRange::up_to(config.max_price)),
        2
    );
}

#[test]
fn test_cart_add_add_set_quantity_scenario() {
    let catalog = demo_catalog();
    let storage = MemoryStorage::new();
    let mut cart = CartStore::open(&storage, &StorefrontConfig::default());
    let headphones = catalog.get("1").unwrap();

    cart.add(headphones, 2);
    cart.add(headphones, 3);
    assert_eq!(cart.quantity_of("1"), 5);

    cart.set_quantity("1", 1);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.quantity_of("1"), 1);
    assert_eq!(cart.total_item_count(), 1);
    assert_eq!(cart.total(), 299.99);

    let slot = saved_slot(&storage, "ecommerce_cart");
    assert_eq!(slot["itemCount"], 1);
    assert_eq!(slot["items"].as_array().unwrap().len(), 1);
    assert_eq!(slot["items"][0]["quantity"], 1);
}

#[test]
fn test_cart_session_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = demo_catalog();
    let config = StorefrontConfig::default();

    {
        let mut cart = CartStore::open(FileStorage::new(dir.path()), &config);
        cart.add(catalog.get("2").unwrap(), 2);
        cart.add_one(catalog.get("6").unwrap());
        cart.add_one(catalog.get("4").unwrap());
        cart.remove("4");
    }

    let cart = CartStore::open(FileStorage::new(dir.path()), &config);
    assert_eq!(
        cart.summary(),
        "2x Smart Fitness Watch, 1x Wireless Phone Charger"
    );
    assert_eq!(cart.total_item_count(), 3);
    assert!(!cart.contains("4"));
    assert_eq!(format_price(cart.total()), "$439.97");
}

#[test]
fn test_cart_restores_unversioned_blob() {
    let catalog = demo_catalog();
    let storage = MemoryStorage::new();
    let charger = serde_json::to_value(catalog.get("6").unwrap()).unwrap();
    let legacy = serde_json::json!({
        "items": [{ "id": "6", "product": charger, "quantity": 3 }],
        "total": 119.97,
        "itemCount": 3
    });
    storage
        .set_item("ecommerce_cart", &legacy.to_string())
        .unwrap();

    let mut cart = CartStore::open(&storage, &StorefrontConfig::default());
    assert_eq!(cart.quantity_of("6"), 3);

    cart.set_quantity("6", 0);
    assert!(cart.state().is_empty());
    assert_eq!(saved_slot(&storage, "ecommerce_cart")["version"], 1);
}

#[test]
fn test_cart_ignores_corrupt_slot_without_deleting_it() {
    let storage = MemoryStorage::new();
    storage.set_item("ecommerce_cart", "[1, 2, 3]").unwrap();

    let cart = CartStore::open(&storage, &StorefrontConfig::default());

    assert_eq!(cart.state(), &CartState::default());
    assert_eq!(
        storage.get_item("ecommerce_cart").unwrap().as_deref(),
        Some("[1, 2, 3]")
    );
}

#[test]
fn test_detail_page_flow() {
    let catalog = demo_catalog();
    let config = StorefrontConfig::default();
    let storage = MemoryStorage::new();
    let mut cart = CartStore::open(&storage, &config);

    let mut chair =
        ProductDetail::build(&catalog, "4", cart.state(), config.related_limit).unwrap();
    assert_eq!(chair.discount_percentage, 25);
    assert!(chair.related.is_empty());
    assert_eq!(format_price(chair.line_price(2)), "$899.98");

    chair.decrement();
    chair.increment();
    assert_eq!(chair.selected_quantity(), 2);
    assert_eq!(format_price(chair.selected_line_price()), "$899.98");

    assert!(chair.add_to_cart(&mut cart));
    assert_eq!(chair.in_cart, 2);

    let reopened = ProductDetail::build(&catalog, "4", cart.state(), config.related_limit).unwrap();
    assert_eq!(reopened.in_cart, 2);
    assert!(ProductDetail::build(&catalog, "missing", cart.state(), 4).is_none());
}
