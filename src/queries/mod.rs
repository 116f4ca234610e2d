//! Read-side query modules for the commerce backend.
//!
//! Each module provides a query struct that borrows an
//! [`ApiClient`](crate::client::ApiClient) and exposes methods returning
//! `Result<T>` with typed models from [`models`](crate::models).

pub mod products;
pub mod tickets;
pub mod transactions;

pub use products::{ProductQuery, SearchProductsParams};
pub use tickets::TicketQuery;
pub use transactions::TransactionQuery;
