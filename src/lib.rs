//! Snapcart SDK for Rust.
//!
//! Client-side cart and checkout engine for a headless-commerce marketplace
//! that sells event tickets and rentable equipment. The SDK owns the cart
//! (with persistence across sessions), the selection/validation rules that
//! gate checkout, the order payload assembler, and the order → payment-token
//! → popup flow against the backend and a Snap-style payment gateway.
//!
//! # Quick start
//!
//! ```no_run
//! use snapcart_sdk::SnapcartSdk;
//! use snapcart_sdk::models::{CartItem, Fulfillment};
//!
//! let mut sdk = SnapcartSdk::builder().build().unwrap();
//!
//! // Browse the catalog
//! let products = sdk.products().search(&Default::default()).unwrap();
//!
//! // Stage an item and select it for checkout
//! let id = sdk.cart_mut().add(CartItem {
//!     id: 0,
//!     product_id: products[0].id,
//!     name: products[0].name.clone(),
//!     variant: None,
//!     price: products[0].lowest_price(),
//!     quantity: 1,
//!     note: String::new(),
//!     customer_name: "Ayu".into(),
//!     phone: "0812000111".into(),
//!     fulfillment: Fulfillment::equipment(),
//! });
//! sdk.cart_mut().select(id);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod query_builder;
pub mod storage;
pub mod store;
pub mod validate;

#[cfg(feature = "async")]
pub use async_client::{AsyncSnapcartSdk, VendorFeed};
pub use checkout::{CheckoutFlow, CheckoutResult, CommerceBackend, PaymentGateway};
pub use client::ApiClient;
pub use error::{Result, SnapcartError};
pub use query_builder::QueryBuilder;
pub use storage::CartStorage;
pub use store::CartStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::{EquipmentForm, TransactionSummary};

// ---------------------------------------------------------------------------
// SnapcartSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SnapcartSdk`] instance.
///
/// Use [`SnapcartSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SnapcartSdkBuilder::build) to create the SDK.
pub struct SnapcartSdkBuilder {
    base_url: String,
    store_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
}

impl Default for SnapcartSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_API_BASE.to_string(),
            store_dir: None,
            offline: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl SnapcartSdkBuilder {
    /// Point the SDK at a different backend base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set a custom directory for the persisted cart.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/snapcart-sdk` on Linux).
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never calls the backend: the persisted cart
    /// and all local operations keep working, while queries and checkout
    /// fail early with [`SnapcartError::Offline`]. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for backend calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, initializing storage and loading the persisted cart.
    ///
    /// Does not touch the network; backend calls happen lazily per query.
    pub fn build(self) -> Result<SnapcartSdk> {
        let storage = CartStorage::new(self.store_dir)?;
        let cart = CartStore::from_items(storage.load()?);
        let client = ApiClient::new(&self.base_url, self.timeout, self.offline)?;
        Ok(SnapcartSdk {
            client,
            storage,
            cart,
            last_transaction: None,
        })
    }
}

// ---------------------------------------------------------------------------
// SnapcartSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Snapcart SDK.
///
/// Owns the [`ApiClient`], the [`CartStore`], its backing [`CartStorage`],
/// and the session-local summary of the last successful payment. The store
/// has an explicit lifecycle: created with the SDK, torn down via
/// [`end_session()`](SnapcartSdk::end_session) — it is never ambient global
/// state.
///
/// Created via [`SnapcartSdk::builder()`].
pub struct SnapcartSdk {
    client: ApiClient,
    storage: CartStorage,
    cart: CartStore,
    last_transaction: Option<TransactionSummary>,
}

impl SnapcartSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SnapcartSdkBuilder {
        SnapcartSdkBuilder::default()
    }

    // -- Cart --------------------------------------------------------------

    /// The cart store (read access).
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart store (mutation: add, select, update, remove).
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Whether the current selection can proceed to payment.
    pub fn checkout_ready(&self) -> bool {
        validate::checkout_ready(&self.cart)
    }

    /// Persist the current cart items to disk.
    ///
    /// The selection set is session-only and is not written.
    pub fn save(&self) -> Result<()> {
        self.storage.save(self.cart.items())
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the product query interface.
    ///
    /// Returns a lightweight wrapper that borrows the underlying client.
    pub fn products(&self) -> queries::products::ProductQuery<'_> {
        queries::products::ProductQuery::new(&self.client)
    }

    /// Access the ticket query interface.
    pub fn tickets(&self) -> queries::tickets::TicketQuery<'_> {
        queries::tickets::TicketQuery::new(&self.client)
    }

    /// Access the order-tracking query interface.
    pub fn transactions(&self) -> queries::transactions::TransactionQuery<'_> {
        queries::transactions::TransactionQuery::new(&self.client)
    }

    // -- Checkout ----------------------------------------------------------

    /// The shared equipment form pre-populated from the current selection,
    /// for the caller to present and let the user edit.
    pub fn equipment_form(&self) -> Option<EquipmentForm> {
        checkout::equipment_form_prefill(&self.cart)
    }

    /// Run one checkout attempt for the current selection.
    ///
    /// On a paid outcome the purchased items leave the cart, the selection
    /// is cleared, the cart is re-persisted, and the transaction summary is
    /// retained for [`last_transaction()`](SnapcartSdk::last_transaction).
    pub fn checkout<G: PaymentGateway>(
        &mut self,
        gateway: &mut G,
        form: Option<&EquipmentForm>,
    ) -> Result<CheckoutResult> {
        let mut flow = CheckoutFlow::new(&self.client, gateway);
        let result = flow.run(&mut self.cart, form)?;
        if let Some(ref summary) = result.summary {
            self.last_transaction = Some(summary.clone());
            self.storage.save(self.cart.items())?;
        }
        Ok(result)
    }

    /// Summary of the last successful payment this session, if any.
    pub fn last_transaction(&self) -> Option<&TransactionSummary> {
        self.last_transaction.as_ref()
    }

    // -- Lifecycle ---------------------------------------------------------

    /// Tear down the session: empty the cart, drop the persisted file, and
    /// forget the last transaction. Called on logout.
    pub fn end_session(&mut self) -> Result<()> {
        self.cart.clear();
        self.last_transaction = None;
        self.storage.clear()
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SnapcartSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SnapcartSdk(base_url={}, items={}, selected={}, store_dir={}, offline={})",
            self.client.base_url(),
            self.cart.len(),
            self.cart.selected_items().len(),
            self.storage.store_dir.display(),
            self.client.is_offline()
        )
    }
}
