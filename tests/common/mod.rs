//! Shared fixtures for the Snapcart SDK integration tests.
//!
//! Provides cart item builders (complete ticket and equipment lines) and
//! stub implementations of the backend and payment-gateway seams so the
//! checkout flow can run without a network.

#![allow(dead_code)]

use std::cell::RefCell;

use snapcart_sdk::checkout::{CommerceBackend, PaymentGateway};
use snapcart_sdk::models::{
    CartItem, Fulfillment, OrderPayload, OrderReceipt, PaymentOutcome, Recipient,
};
use snapcart_sdk::{Result, SnapcartError};

/// A fully filled-in recipient, numbered for distinct names.
pub fn recipient(n: u32) -> Recipient {
    Recipient {
        name: format!("Guest {}", n),
        identity_type: "ktp".to_string(),
        identity_number: format!("317409000{:04}", n),
        whatsapp_number: format!("62812000{:04}", n),
        email: format!("guest{}@example.com", n),
    }
}

/// A ticket cart item with `n_recipients` complete recipients attached.
pub fn ticket_item(id: u64, quantity: u32, price: u64, n_recipients: u32) -> CartItem {
    CartItem {
        id,
        product_id: id.saturating_add(100),
        name: format!("Concert Pass {}", id),
        variant: Some("VIP".to_string()),
        price,
        quantity,
        note: String::new(),
        customer_name: "Ayu Lestari".to_string(),
        phone: "628120001111".to_string(),
        fulfillment: Fulfillment::Ticket {
            recipients: (1..=n_recipients).map(recipient).collect(),
        },
    }
}

/// An equipment cart item with every fulfillment field filled.
pub fn equipment_item(id: u64, quantity: u32, price: u64) -> CartItem {
    CartItem {
        id,
        product_id: id.saturating_add(200),
        name: format!("Stage Rig {}", id),
        variant: Some("Full package".to_string()),
        price,
        quantity,
        note: format!("note-{}", id),
        customer_name: "Budi Santoso".to_string(),
        phone: "628120002222".to_string(),
        fulfillment: Fulfillment::Equipment {
            event_date: "2026-09-20".to_string(),
            shipping_location: "Jl. Merdeka 1, Bandung".to_string(),
            loading_date: "2026-09-19".to_string(),
            loading_time: "08:00".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Stub seams
// ---------------------------------------------------------------------------

/// In-memory backend: records created orders, optionally fails the token
/// request to exercise the orphaned-order path.
pub struct StubBackend {
    pub fail_token: bool,
    pub orders: RefCell<Vec<OrderPayload>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            fail_token: false,
            orders: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_token() -> Self {
        Self {
            fail_token: true,
            orders: RefCell::new(Vec::new()),
        }
    }
}

impl CommerceBackend for StubBackend {
    fn create_order(&self, payload: &OrderPayload) -> Result<OrderReceipt> {
        self.orders.borrow_mut().push(payload.clone());
        Ok(OrderReceipt {
            order_id: 77,
            reference: "ORD-000077".to_string(),
            amount: payload.total(),
        })
    }

    fn payment_token(&self, receipt: &OrderReceipt) -> Result<String> {
        if self.fail_token {
            return Err(SnapcartError::Api {
                status: 500,
                message: "token service unavailable".to_string(),
            });
        }
        Ok(format!("tok-{}", receipt.order_id))
    }
}

/// Gateway stub that reports a scripted popup outcome.
pub struct StubGateway {
    pub outcome: PaymentOutcome,
    pub tokens_seen: Vec<String>,
}

impl StubGateway {
    pub fn paying(transaction_id: &str) -> Self {
        Self {
            outcome: PaymentOutcome::Paid {
                transaction_id: transaction_id.to_string(),
            },
            tokens_seen: Vec::new(),
        }
    }

    pub fn closing() -> Self {
        Self {
            outcome: PaymentOutcome::Closed,
            tokens_seen: Vec::new(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: PaymentOutcome::Failed {
                message: message.to_string(),
            },
            tokens_seen: Vec::new(),
        }
    }
}

impl PaymentGateway for StubGateway {
    fn pay(&mut self, token: &str) -> PaymentOutcome {
        self.tokens_seen.push(token.to_string());
        self.outcome.clone()
    }
}
