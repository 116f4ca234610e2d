//! Per-item readiness and the overall checkout-ready conjunction.

mod common;

use snapcart_sdk::models::Fulfillment;
use snapcart_sdk::validate::{checkout_ready, digits_only, item_ready, recipient_complete};
use snapcart_sdk::CartStore;

// ---------------------------------------------------------------------------
// digits_only / recipient_complete
// ---------------------------------------------------------------------------

#[test]
fn digits_only_accepts_numeric_strings() {
    assert!(digits_only("0812345678"));
    assert!(digits_only("7"));
}

#[test]
fn digits_only_rejects_empty_and_mixed_input() {
    assert!(!digits_only(""));
    assert!(!digits_only("0812-345"));
    assert!(!digits_only("+62812345"));
    assert!(!digits_only("abc"));
}

#[test]
fn recipient_complete_requires_every_field() {
    let full = common::recipient(1);
    assert!(recipient_complete(&full));

    let mut r = common::recipient(1);
    r.email.clear();
    assert!(!recipient_complete(&r));

    let mut r = common::recipient(1);
    r.identity_number = "A-123".to_string();
    assert!(!recipient_complete(&r));

    let mut r = common::recipient(1);
    r.whatsapp_number = "+628120001111".to_string();
    assert!(!recipient_complete(&r));
}

// ---------------------------------------------------------------------------
// item_ready: ticket branch
// ---------------------------------------------------------------------------

#[test]
fn ticket_item_needs_one_recipient_per_unit() {
    // Quantity 2, only one recipient: field completeness doesn't matter.
    let item = common::ticket_item(1, 2, 100_000, 1);
    assert!(!item_ready(&item));

    let item = common::ticket_item(1, 2, 100_000, 2);
    assert!(item_ready(&item));

    // Too many recipients is just as invalid as too few.
    let item = common::ticket_item(1, 2, 100_000, 3);
    assert!(!item_ready(&item));
}

#[test]
fn ticket_item_needs_complete_recipients() {
    let mut item = common::ticket_item(1, 2, 100_000, 2);
    if let Fulfillment::Ticket { ref mut recipients } = item.fulfillment {
        recipients[1].identity_number = String::new();
    }
    assert!(!item_ready(&item));
}

#[test]
fn ticket_item_needs_customer_name_and_phone() {
    let mut item = common::ticket_item(1, 1, 100_000, 1);
    item.customer_name.clear();
    assert!(!item_ready(&item));

    let mut item = common::ticket_item(1, 1, 100_000, 1);
    item.phone.clear();
    assert!(!item_ready(&item));
}

// ---------------------------------------------------------------------------
// item_ready: equipment branch
// ---------------------------------------------------------------------------

#[test]
fn equipment_item_with_all_fields_is_ready() {
    let item = common::equipment_item(1, 1, 250_000);
    assert!(item_ready(&item));
}

#[test]
fn equipment_item_missing_loading_time_flips_ready_when_filled() {
    let mut item = common::equipment_item(1, 1, 250_000);
    if let Fulfillment::Equipment {
        ref mut loading_time,
        ..
    } = item.fulfillment
    {
        loading_time.clear();
    }
    assert!(!item_ready(&item));

    if let Fulfillment::Equipment {
        ref mut loading_time,
        ..
    } = item.fulfillment
    {
        *loading_time = "09:30".to_string();
    }
    assert!(item_ready(&item));
}

#[test]
fn equipment_item_requires_each_logistics_field() {
    for field in 0..4 {
        let mut item = common::equipment_item(1, 1, 250_000);
        if let Fulfillment::Equipment {
            ref mut event_date,
            ref mut shipping_location,
            ref mut loading_date,
            ref mut loading_time,
        } = item.fulfillment
        {
            match field {
                0 => event_date.clear(),
                1 => shipping_location.clear(),
                2 => loading_date.clear(),
                _ => loading_time.clear(),
            }
        }
        assert!(!item_ready(&item), "field {} should be required", field);
    }
}

// ---------------------------------------------------------------------------
// checkout_ready
// ---------------------------------------------------------------------------

#[test]
fn checkout_ready_needs_valid_selection_and_ready_items() {
    let mut store = CartStore::new();
    store.add(common::ticket_item(1, 2, 100_000, 1));
    store.select(1);

    // Selection is coherent but the item is short one recipient.
    assert!(store.validate_selection());
    assert!(!checkout_ready(&store));

    store.update_recipients(1, vec![common::recipient(1), common::recipient(2)]);
    assert!(checkout_ready(&store));
}

#[test]
fn checkout_ready_tracks_state_changes_immediately() {
    let mut store = CartStore::new();
    store.add(common::ticket_item(1, 1, 100_000, 1));
    store.add(common::equipment_item(2, 1, 250_000));
    store.select(1);
    assert!(checkout_ready(&store));

    // Nothing is cached: adding the second kind flips the answer at once.
    store.select(2);
    assert!(!checkout_ready(&store));

    store.deselect(2);
    assert!(checkout_ready(&store));
}

#[test]
fn checkout_ready_is_false_with_nothing_selected() {
    let mut store = CartStore::new();
    store.add(common::equipment_item(1, 1, 250_000));
    assert!(!checkout_ready(&store));
}
