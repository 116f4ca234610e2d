//! Ticket listing queries.
//!
//! Tickets are products of kind `ticket` with event metadata attached; the
//! backend exposes them on their own endpoint.

use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::Product;
use crate::query_builder::QueryBuilder;

/// Query interface for ticketed events.
pub struct TicketQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> TicketQuery<'a> {
    /// Create a new `TicketQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Retrieve a single ticket listing by its backend id.
    pub fn get_by_id(&self, id: u64) -> Result<Option<Product>> {
        let path = format!("{}/{}", config::TICKETS_PATH, id);
        self.client.get_one(&path)
    }

    /// Ticketed events on or after `date` (ISO `YYYY-MM-DD`), soonest first.
    pub fn upcoming(&self, date: &str) -> Result<Vec<Product>> {
        let query = QueryBuilder::new()
            .filter_gte("event_date", date)
            .sort("event_date", "asc")
            .populate("variants")
            .build();
        self.client.get_list(config::TICKETS_PATH, &query)
    }

    /// Events in a category, soonest first.
    pub fn by_category(&self, category: &str) -> Result<Vec<Product>> {
        let query = QueryBuilder::new()
            .filter_eq("category", category)
            .sort("event_date", "asc")
            .populate("variants")
            .build();
        self.client.get_list(config::TICKETS_PATH, &query)
    }
}
