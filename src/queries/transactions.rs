//! Order-tracking queries.

use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::TransactionRecord;
use crate::query_builder::QueryBuilder;

/// Query interface for a customer's past orders.
pub struct TransactionQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> TransactionQuery<'a> {
    /// Create a new `TransactionQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All orders placed under a phone number, newest first.
    pub fn for_customer(&self, phone: &str) -> Result<Vec<TransactionRecord>> {
        let query = QueryBuilder::new()
            .filter_eq("phone", phone)
            .sort("created_at", "desc")
            .build();
        self.client.get_list(config::TRANSACTIONS_PATH, &query)
    }

    /// Look up one order by its reference code.
    pub fn get_by_reference(&self, reference: &str) -> Result<Option<TransactionRecord>> {
        let query = QueryBuilder::new().filter_eq("reference", reference).build();
        let mut records: Vec<TransactionRecord> =
            self.client.get_list(config::TRANSACTIONS_PATH, &query)?;
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.remove(0))
        })
    }
}
