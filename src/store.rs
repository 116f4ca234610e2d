//! In-memory cart store: line items plus the checkout selection set.
//!
//! The store is an explicit object owned by the SDK (or constructed directly
//! in tests), never ambient global state. Items live in insertion order;
//! the selection set tracks which item ids are staged for the next checkout
//! attempt and is session-only — it is never persisted.

use std::collections::HashSet;

use crate::models::{CartItem, Fulfillment, ProductKind, Recipient};

/// Owns the cart line items and the selection set, and answers derived
/// queries about them.
///
/// Mutation never fails: operations on unknown ids are no-ops, and the
/// validators return plain booleans. Invalid states are something for the
/// caller to display, not errors.
#[derive(Debug, Default, Clone)]
pub struct CartStore {
    items: Vec<CartItem>,
    selection: HashSet<u64>,
    next_id: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted items.
    ///
    /// The selection set always starts empty; it does not survive reloads.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let next_id = items
            .iter()
            .map(|i| i.id)
            .max()
            .map_or(1, |m| m.saturating_add(1));
        Self {
            items,
            selection: HashSet::new(),
            next_id,
        }
    }

    // -- Item mutation -----------------------------------------------------

    /// Add an item to the cart, returning its cart-local id.
    ///
    /// An incoming id of 0 means "assign one for me"; any other id is kept
    /// as-is (reload path).
    pub fn add(&mut self, mut item: CartItem) -> u64 {
        if item.id == 0 {
            item.id = self.next_id;
        }
        self.next_id = self.next_id.max(item.id.saturating_add(1));
        let id = item.id;
        self.items.push(item);
        id
    }

    pub fn update_quantity(&mut self, id: u64, quantity: u32) {
        if let Some(item) = self.item_mut(id) {
            item.quantity = quantity;
        }
    }

    pub fn update_note(&mut self, id: u64, note: &str) {
        if let Some(item) = self.item_mut(id) {
            item.note = note.to_string();
        }
    }

    /// Replace the recipient list of a ticket item. No-op on equipment
    /// items and unknown ids.
    pub fn update_recipients(&mut self, id: u64, recipients: Vec<Recipient>) {
        if let Some(item) = self.item_mut(id) {
            if let Fulfillment::Ticket {
                recipients: ref mut existing,
            } = item.fulfillment
            {
                *existing = recipients;
            }
        }
    }

    /// Remove an item from the cart. Also drops it from the selection so
    /// the selection set never references a missing item.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|i| i.id != id);
        self.selection.remove(&id);
    }

    /// Empty the cart and the selection (logout / session teardown).
    pub fn clear(&mut self) {
        self.items.clear();
        self.selection.clear();
    }

    // -- Selection ---------------------------------------------------------

    /// Mark an item as selected for the next checkout. No-op when the id
    /// is not in the cart.
    pub fn select(&mut self, id: u64) {
        if self.items.iter().any(|i| i.id == id) {
            self.selection.insert(id);
        }
    }

    pub fn deselect(&mut self, id: u64) {
        self.selection.remove(&id);
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(&id)
    }

    /// Empty the selection set without touching cart contents.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -- Derived queries ---------------------------------------------------

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, id: u64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn item_mut(&mut self, id: u64) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected items in cart order (not selection order).
    pub fn selected_items(&self) -> Vec<&CartItem> {
        self.items
            .iter()
            .filter(|i| self.selection.contains(&i.id))
            .collect()
    }

    /// The single product kind of the current selection, when the selection
    /// is valid.
    pub fn selected_kind(&self) -> Option<ProductKind> {
        if self.validate_selection() {
            self.selected_items().first().map(|i| i.kind())
        } else {
            None
        }
    }

    /// True iff the selection is non-empty and every selected item shares
    /// the first selected item's product kind.
    ///
    /// Pure function of current state; nothing is cached, so it is always
    /// in step with the cart.
    pub fn validate_selection(&self) -> bool {
        let selected = self.selected_items();
        match selected.first() {
            None => false,
            Some(first) => {
                let kind = first.kind();
                selected.iter().all(|i| i.kind() == kind)
            }
        }
    }

    /// Sum of `price × quantity` over the entire cart, regardless of what
    /// is selected. The "whole cart" summary line. Saturates rather than
    /// overflowing on extreme values.
    pub fn calculate_total(&self) -> u64 {
        self.items
            .iter()
            .map(CartItem::subtotal)
            .fold(0, u64::saturating_add)
    }

    /// Sum of `price × quantity` over the selected items only.
    pub fn selected_total(&self) -> u64 {
        self.selected_items()
            .iter()
            .map(|i| i.subtotal())
            .fold(0, u64::saturating_add)
    }
}
