use serde::{Deserialize, Serialize};

use crate::models::product::ProductKind;

// ---------------------------------------------------------------------------
// Recipient
// ---------------------------------------------------------------------------

/// Per-ticket-unit identity/contact record required for ticket fulfillment.
///
/// A ticket cart item must carry exactly one recipient per unit purchased
/// before it can proceed to payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub identity_type: String,
    pub identity_number: String,
    pub whatsapp_number: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Fulfillment
// ---------------------------------------------------------------------------

/// Type-specific fulfillment data carried by a cart item.
///
/// The two shapes never mix: validators and the payload assembler match on
/// this exhaustively, so there is no "field may or may not exist" probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "product_type", rename_all = "lowercase")]
pub enum Fulfillment {
    /// One recipient per ticket unit, in purchase order.
    Ticket { recipients: Vec<Recipient> },
    /// Rental logistics for an equipment order. All fields are free-text
    /// form values; only presence is validated.
    Equipment {
        event_date: String,
        shipping_location: String,
        loading_date: String,
        loading_time: String,
    },
}

impl Fulfillment {
    /// Empty ticket fulfillment (no recipients entered yet).
    pub fn ticket() -> Self {
        Fulfillment::Ticket {
            recipients: Vec::new(),
        }
    }

    /// Equipment fulfillment with no logistics filled in yet.
    pub fn equipment() -> Self {
        Fulfillment::Equipment {
            event_date: String::new(),
            shipping_location: String::new(),
            loading_date: String::new(),
            loading_time: String::new(),
        }
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            Fulfillment::Ticket { .. } => ProductKind::Ticket,
            Fulfillment::Equipment { .. } => ProductKind::Equipment,
        }
    }
}

// ---------------------------------------------------------------------------
// CartItem
// ---------------------------------------------------------------------------

/// One purchasable line staged for checkout.
///
/// Created when a user adds a product to the cart; persists in client-side
/// storage until removed or a checkout that includes it completes. `id` is
/// local to the cart, not a backend identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub product_id: u64,
    pub name: String,
    /// Selected variant name, when the product has variants.
    #[serde(default)]
    pub variant: Option<String>,
    /// Unit price in integer currency units.
    pub price: u64,
    pub quantity: u32,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub customer_name: String,
    /// Resolved contact phone for this order line.
    #[serde(default)]
    pub phone: String,
    #[serde(flatten)]
    pub fulfillment: Fulfillment,
}

impl CartItem {
    pub fn kind(&self) -> ProductKind {
        self.fulfillment.kind()
    }

    /// Line subtotal: unit price times quantity. Saturates rather than
    /// overflowing on extreme persisted values.
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}
