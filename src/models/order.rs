use serde::{Deserialize, Serialize};

use crate::models::cart::Recipient;

// ---------------------------------------------------------------------------
// Order payloads
// ---------------------------------------------------------------------------

/// Shared fulfillment fields for an equipment order.
///
/// Pre-populated from the first selected equipment item and editable by the
/// user before submission; the submitted form applies to the whole order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentForm {
    pub customer_name: String,
    pub phone: String,
    pub event_date: String,
    pub shipping_location: String,
    pub loading_date: String,
    pub loading_time: String,
}

/// Aggregated order record for all selected equipment items.
///
/// Variant names, quantities, and notes are comma-joined in cart order; the
/// logistics fields come from the single shared form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentOrder {
    pub variant_names: String,
    pub quantities: String,
    pub notes: String,
    pub total: u64,
    #[serde(flatten)]
    pub form: EquipmentForm,
}

/// Order record for a single ticket product.
///
/// Built from the first selected ticket item only; one payment call never
/// spans multiple distinct ticket products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOrder {
    pub product_id: u64,
    pub variant_name: String,
    pub quantity: u32,
    pub note: String,
    pub customer_name: String,
    pub phone: String,
    pub total: u64,
    pub recipients: Vec<Recipient>,
}

/// The write-once order payload assembled at checkout time.
///
/// Sent once to the backend's order-creation endpoint and reflected once in
/// the payment-token request; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "order_type", rename_all = "lowercase")]
pub enum OrderPayload {
    Ticket(TicketOrder),
    Equipment(EquipmentOrder),
}

impl OrderPayload {
    pub fn total(&self) -> u64 {
        match self {
            OrderPayload::Ticket(o) => o.total,
            OrderPayload::Equipment(o) => o.total,
        }
    }
}

// ---------------------------------------------------------------------------
// Backend responses
// ---------------------------------------------------------------------------

/// The backend's response to order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: u64,
    /// Human-facing order reference code.
    pub reference: String,
    pub amount: u64,
}

/// A customer's past order as reported by the tracking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: u64,
    pub reference: String,
    pub amount: u64,
    /// Backend-side payment status, e.g. `pending`, `settlement`, `expire`.
    pub status: String,
    pub created_at: String,
}

// ---------------------------------------------------------------------------
// Payment outcome
// ---------------------------------------------------------------------------

/// Terminal result of one payment popup attempt.
///
/// Replaces the gateway's onSuccess/onError/onClose callback triple with a
/// value the caller can match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Paid { transaction_id: String },
    Failed { message: String },
    /// The user dismissed the popup without paying.
    Closed,
}

/// Session-local summary of a completed payment.
///
/// Held in memory for the post-payment success view; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub reference: String,
    pub transaction_id: String,
    pub amount: u64,
    pub item_names: Vec<String>,
}
