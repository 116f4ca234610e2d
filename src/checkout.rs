//! Checkout payload assembly and the order → token → popup flow.
//!
//! The assembler turns a valid selection into exactly one of the two order
//! shapes. The flow then makes two sequential backend calls (create the
//! order record, request a payment token) and hands the token to the
//! payment gateway adapter, whose popup result comes back as a
//! [`PaymentOutcome`] value instead of a callback triple.
//!
//! If the token request fails after the order record was created, the
//! record is left in place — there is no compensating delete. The backend
//! reconciles unpaid orders on its side.

use crate::error::{Result, SnapcartError};
use crate::models::{
    CartItem, EquipmentForm, EquipmentOrder, Fulfillment, OrderPayload, OrderReceipt,
    PaymentOutcome, ProductKind, TicketOrder, TransactionSummary,
};
use crate::store::CartStore;
use crate::validate;

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// The two backend write calls the checkout flow depends on.
///
/// Implemented by [`ApiClient`](crate::client::ApiClient); tests substitute
/// an in-memory stub.
pub trait CommerceBackend {
    fn create_order(&self, payload: &OrderPayload) -> Result<OrderReceipt>;
    fn payment_token(&self, receipt: &OrderReceipt) -> Result<String>;
}

/// Thin adapter over the external payment popup.
///
/// `pay` blocks for the duration of the popup and reports how it ended.
pub trait PaymentGateway {
    fn pay(&mut self, token: &str) -> PaymentOutcome;
}

// ---------------------------------------------------------------------------
// Payload assembly
// ---------------------------------------------------------------------------

/// Pre-populate the shared equipment form from the first selected
/// equipment item, or `None` when the selection holds no equipment item.
///
/// The user edits this form before submitting; the submitted values apply
/// to the whole equipment order.
pub fn equipment_form_prefill(store: &CartStore) -> Option<EquipmentForm> {
    let first = store
        .selected_items()
        .into_iter()
        .find(|i| i.kind() == ProductKind::Equipment)?;
    match &first.fulfillment {
        Fulfillment::Equipment {
            event_date,
            shipping_location,
            loading_date,
            loading_time,
        } => Some(EquipmentForm {
            customer_name: first.customer_name.clone(),
            phone: first.phone.clone(),
            event_date: event_date.clone(),
            shipping_location: shipping_location.clone(),
            loading_date: loading_date.clone(),
            loading_time: loading_time.clone(),
        }),
        Fulfillment::Ticket { .. } => None,
    }
}

/// Assemble the write-once order payload from the current selection.
///
/// Returns `None` unless [`validate::checkout_ready`] holds. For equipment,
/// `form` overrides the prefilled shared fields and must itself pass
/// [`validate::equipment_form_complete`]; ticket orders ignore it.
pub fn build_payload(store: &CartStore, form: Option<&EquipmentForm>) -> Option<OrderPayload> {
    if !validate::checkout_ready(store) {
        return None;
    }
    let selected = store.selected_items();
    let kind = selected.first()?.kind();

    match kind {
        ProductKind::Ticket => {
            // One payment call covers a single ticket product; the first
            // selected item wins.
            let item = selected.first()?;
            let recipients = match &item.fulfillment {
                Fulfillment::Ticket { recipients } => recipients.clone(),
                Fulfillment::Equipment { .. } => return None,
            };
            Some(OrderPayload::Ticket(TicketOrder {
                product_id: item.product_id,
                variant_name: variant_label(item),
                quantity: item.quantity,
                note: item.note.clone(),
                customer_name: item.customer_name.clone(),
                phone: item.phone.clone(),
                total: item.subtotal(),
                recipients,
            }))
        }
        ProductKind::Equipment => {
            let form = match form {
                Some(f) => f.clone(),
                None => equipment_form_prefill(store)?,
            };
            // The edited form can blank out fields the cart items had
            // filled in; it must pass the same presence rules.
            if !validate::equipment_form_complete(&form) {
                return None;
            }
            let variant_names = join_by(&selected, variant_label);
            let quantities = join_by(&selected, |i| i.quantity.to_string());
            let notes = join_by(&selected, |i| i.note.clone());
            Some(OrderPayload::Equipment(EquipmentOrder {
                variant_names,
                quantities,
                notes,
                total: store.selected_total(),
                form,
            }))
        }
    }
}

fn variant_label(item: &CartItem) -> String {
    item.variant.clone().unwrap_or_else(|| item.name.clone())
}

fn join_by<F: Fn(&CartItem) -> String>(items: &[&CartItem], f: F) -> String {
    items.iter().map(|i| f(i)).collect::<Vec<_>>().join(", ")
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// What one checkout attempt produced.
#[derive(Debug, Clone)]
pub struct CheckoutResult {
    pub receipt: OrderReceipt,
    pub outcome: PaymentOutcome,
    /// Present only when the payment succeeded.
    pub summary: Option<TransactionSummary>,
}

/// Drives one checkout attempt: create order, request token, open popup.
pub struct CheckoutFlow<'a, B: CommerceBackend, G: PaymentGateway> {
    backend: &'a B,
    gateway: &'a mut G,
}

impl<'a, B: CommerceBackend, G: PaymentGateway> CheckoutFlow<'a, B, G> {
    pub fn new(backend: &'a B, gateway: &'a mut G) -> Self {
        Self { backend, gateway }
    }

    /// Run the flow for the store's current selection.
    ///
    /// On a paid outcome the purchased items are removed from the cart and
    /// the selection is cleared. A failed or closed popup leaves the cart
    /// untouched so the user can retry. A backend rejection at either step
    /// aborts the attempt with the error; no retry is made.
    pub fn run(
        &mut self,
        store: &mut CartStore,
        form: Option<&EquipmentForm>,
    ) -> Result<CheckoutResult> {
        let payload = build_payload(store, form).ok_or_else(|| {
            SnapcartError::InvalidArgument("selection is not ready for checkout".into())
        })?;

        let receipt = self.backend.create_order(&payload)?;

        let token = match self.backend.payment_token(&receipt) {
            Ok(token) => token,
            Err(e) => {
                // The order record created above is not deleted here; the
                // backend owns reconciliation of unpaid orders.
                eprintln!(
                    "payment token request failed for order {}; order record remains: {}",
                    receipt.reference, e
                );
                return Err(e);
            }
        };

        let outcome = self.gateway.pay(&token);

        let summary = match &outcome {
            PaymentOutcome::Paid { transaction_id } => {
                let purchased: Vec<u64> = purchased_ids(store, &payload);
                let item_names = store
                    .selected_items()
                    .into_iter()
                    .filter(|i| purchased.contains(&i.id))
                    .map(|i| i.name.clone())
                    .collect();
                for id in purchased {
                    store.remove(id);
                }
                store.clear_selection();
                Some(TransactionSummary {
                    reference: receipt.reference.clone(),
                    transaction_id: transaction_id.clone(),
                    amount: receipt.amount,
                    item_names,
                })
            }
            PaymentOutcome::Failed { message } => {
                eprintln!(
                    "payment failed for order {}: {}",
                    receipt.reference, message
                );
                None
            }
            PaymentOutcome::Closed => None,
        };

        Ok(CheckoutResult {
            receipt,
            outcome,
            summary,
        })
    }
}

/// The cart ids the paid order covered: the whole selection for equipment,
/// only the first selected item for a ticket order.
fn purchased_ids(store: &CartStore, payload: &OrderPayload) -> Vec<u64> {
    let selected = store.selected_items();
    match payload {
        OrderPayload::Equipment(_) => selected.iter().map(|i| i.id).collect(),
        OrderPayload::Ticket(_) => selected.first().map(|i| i.id).into_iter().collect(),
    }
}
