//! Model-level behaviour: lowest-price resolution and the tagged
//! fulfillment shape used by the persisted cart.

mod common;

use snapcart_sdk::models::{lowest_variant_price, CartItem, Product, ProductKind, Variant};

// ---------------------------------------------------------------------------
// Lowest-price resolver
// ---------------------------------------------------------------------------

#[test]
fn lowest_variant_price_picks_the_minimum() {
    let variants = vec![
        Variant {
            name: "Regular".to_string(),
            price: 100,
        },
        Variant {
            name: "Early bird".to_string(),
            price: 50,
        },
    ];
    assert_eq!(lowest_variant_price(&variants, 999), 50);
}

#[test]
fn empty_variants_fall_back_to_the_base_price() {
    assert_eq!(lowest_variant_price(&[], 75_000), 75_000);
}

#[test]
fn product_lowest_price_uses_its_own_base_as_fallback() {
    let product = Product {
        id: 1,
        slug: "stage-rig".to_string(),
        name: "Stage Rig".to_string(),
        description: None,
        base_price: 120_000,
        kind: ProductKind::Equipment,
        variants: Vec::new(),
        vendor: None,
        category: None,
        image_url: None,
    };
    assert_eq!(product.lowest_price(), 120_000);
}

#[test]
fn subtotal_saturates_instead_of_overflowing() {
    let item = common::equipment_item(1, 2, u64::MAX);
    assert_eq!(item.subtotal(), u64::MAX);
}

// ---------------------------------------------------------------------------
// Fulfillment tagging
// ---------------------------------------------------------------------------

#[test]
fn cart_item_json_carries_the_product_type_tag() {
    let item = common::ticket_item(1, 1, 100_000, 1);
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["product_type"], "ticket");
    assert_eq!(json["recipients"].as_array().unwrap().len(), 1);

    let item = common::equipment_item(2, 1, 250_000);
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["product_type"], "equipment");
    assert_eq!(json["loading_time"], "08:00");
}

#[test]
fn product_json_maps_product_type_onto_kind() {
    let json = serde_json::json!({
        "id": 7,
        "slug": "gala-night",
        "name": "Gala Night",
        "base_price": 150_000,
        "product_type": "ticket",
        "variants": [{"name": "VIP", "price": 300_000}]
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert_eq!(product.kind, ProductKind::Ticket);
    assert_eq!(product.lowest_price(), 300_000);
}

#[test]
fn legacy_cart_json_without_optional_fields_still_loads() {
    // Notes, variant, and contact fields were added after the first cart
    // format; absent keys default to empty.
    let json = serde_json::json!({
        "id": 3,
        "product_id": 30,
        "name": "Old line",
        "price": 10_000,
        "quantity": 1,
        "product_type": "ticket",
        "recipients": []
    });
    let item: CartItem = serde_json::from_value(json).unwrap();
    assert_eq!(item.note, "");
    assert_eq!(item.kind(), ProductKind::Ticket);
}
