use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.snapcart.example/api";

pub const PRODUCTS_PATH: &str = "products";
pub const TICKETS_PATH: &str = "tickets";
pub const TRANSACTIONS_PATH: &str = "transactions";
pub const ORDERS_PATH: &str = "orders";
pub const PAYMENT_TOKEN_PATH: &str = "payments/token";

/// File name of the persisted cart inside the store directory.
pub const CART_FILE: &str = "cart.json";

pub fn default_store_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("snapcart-sdk")
    } else {
        PathBuf::from(".snapcart-sdk-store")
    }
}
