//! Per-item and whole-checkout readiness checks.
//!
//! Everything here is a pure boolean predicate over current cart state.
//! Missing or malformed fields disable the checkout action in the UI; they
//! are never surfaced as errors. The conjunction in [`checkout_ready`] is
//! recomputed from scratch on every call — there is no cached validity flag
//! to go stale.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CartItem, EquipmentForm, Fulfillment, Recipient};
use crate::store::CartStore;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid pattern"));

/// True for non-empty strings of ASCII digits only.
pub fn digits_only(s: &str) -> bool {
    DIGITS.is_match(s)
}

/// A recipient is complete when every field is filled and the identity and
/// WhatsApp numbers are numeric.
pub fn recipient_complete(r: &Recipient) -> bool {
    !r.name.is_empty()
        && !r.identity_type.is_empty()
        && !r.email.is_empty()
        && digits_only(&r.identity_number)
        && digits_only(&r.whatsapp_number)
}

/// Whether a single cart item carries enough information to proceed to
/// payment.
///
/// Ticket items need the buyer's name and phone, exactly one complete
/// recipient per unit purchased. Equipment items need the buyer's name and
/// phone plus all four logistics fields.
pub fn item_ready(item: &CartItem) -> bool {
    if item.customer_name.is_empty() || item.phone.is_empty() {
        return false;
    }
    match &item.fulfillment {
        Fulfillment::Ticket { recipients } => {
            recipients.len() == item.quantity as usize
                && recipients.iter().all(recipient_complete)
        }
        Fulfillment::Equipment {
            event_date,
            shipping_location,
            loading_date,
            loading_time,
        } => {
            !event_date.is_empty()
                && !shipping_location.is_empty()
                && !loading_date.is_empty()
                && !loading_time.is_empty()
        }
    }
}

/// The shared equipment form is complete when every field is filled.
///
/// The form the user edits is what actually ships in an equipment order,
/// so it is held to the same presence rules as the items it overrides.
pub fn equipment_form_complete(form: &EquipmentForm) -> bool {
    !form.customer_name.is_empty()
        && !form.phone.is_empty()
        && !form.event_date.is_empty()
        && !form.shipping_location.is_empty()
        && !form.loading_date.is_empty()
        && !form.loading_time.is_empty()
}

/// Overall checkout validity: the selection is coherent and every selected
/// item passes its per-item check.
pub fn checkout_ready(store: &CartStore) -> bool {
    store.validate_selection() && store.selected_items().into_iter().all(item_ready)
}
