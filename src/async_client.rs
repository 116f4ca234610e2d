//! Async wrapper around [`SnapcartSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! underlying client is blocking `reqwest`, so every backend call goes
//! through the pool.
//!
//! # Example
//!
//! ```no_run
//! use snapcart_sdk::AsyncSnapcartSdk;
//!
//! async fn browse() -> snapcart_sdk::Result<()> {
//!     let sdk = AsyncSnapcartSdk::builder().build().await?;
//!
//!     // Run any sync SDK method via closure
//!     let products = sdk.run(|s| {
//!         s.products().search(&Default::default())
//!     }).await?;
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, SnapcartError};
use crate::models::Product;
use crate::SnapcartSdk;

// ---------------------------------------------------------------------------
// AsyncSnapcartSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSnapcartSdk`] instance.
pub struct AsyncSnapcartSdkBuilder {
    base_url: Option<String>,
    store_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
}

impl Default for AsyncSnapcartSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            store_dir: None,
            offline: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AsyncSnapcartSdkBuilder {
    /// Point the SDK at a different backend base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set a custom directory for the persisted cart.
    pub fn store_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for backend calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK, initializing storage on the blocking pool so
    /// cart loading won't block the async event loop.
    pub async fn build(self) -> Result<AsyncSnapcartSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SnapcartSdk::builder();
            if let Some(ref url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(dir) = self.store_dir {
                builder = builder.store_dir(dir);
            }
            builder = builder.offline(self.offline).timeout(self.timeout);
            let sdk = builder.build()?;
            Ok(AsyncSnapcartSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| SnapcartError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSnapcartSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`SnapcartSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`SnapcartSdk`] is
/// protected by a [`Mutex`].
pub struct AsyncSnapcartSdk {
    inner: Arc<Mutex<SnapcartSdk>>,
}

impl AsyncSnapcartSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncSnapcartSdkBuilder {
        AsyncSnapcartSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&mut SnapcartSdk` reference and should return
    /// a `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use snapcart_sdk::AsyncSnapcartSdk;
    /// # async fn example() -> snapcart_sdk::Result<()> {
    /// # let sdk = AsyncSnapcartSdk::builder().build().await?;
    /// let total = sdk.run(|s| Ok(s.cart().calculate_total())).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SnapcartSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| SnapcartError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| SnapcartError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Persist the cart asynchronously.
    pub async fn save(&self) -> Result<()> {
        self.run(|s| s.save()).await
    }

    /// Create a fixed-interval feed over one vendor's product list.
    pub fn vendor_feed(&self, vendor: &str, every: Duration) -> VendorFeed {
        VendorFeed {
            inner: self.inner.clone(),
            vendor: vendor.to_string(),
            every,
            paused: Arc::new(AtomicBool::new(false)),
        }
    }
}

// ---------------------------------------------------------------------------
// VendorFeed
// ---------------------------------------------------------------------------

/// Fixed-interval re-fetch of a vendor's product list.
///
/// Backs the vendor management tab: the tab polls while visible and flips
/// the pause handle when hidden. Paused ticks skip the fetch entirely; this
/// is a plain interval, not a scheduler.
pub struct VendorFeed {
    inner: Arc<Mutex<SnapcartSdk>>,
    vendor: String,
    every: Duration,
    paused: Arc<AtomicBool>,
}

impl VendorFeed {
    /// Handle for pausing/resuming the feed from elsewhere (e.g. a tab
    /// visibility listener). Store `true` to pause.
    pub fn pause_handle(&self) -> Arc<AtomicBool> {
        self.paused.clone()
    }

    /// Fetch the vendor's products once, or `None` when paused.
    pub async fn tick(&self) -> Result<Option<Vec<Product>>> {
        if self.paused.load(Ordering::Relaxed) {
            return Ok(None);
        }
        let sdk = self.inner.clone();
        let vendor = self.vendor.clone();
        let products = tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| SnapcartError::InvalidArgument("SDK lock poisoned".into()))?;
            guard.products().for_vendor(&vendor)
        })
        .await
        .map_err(|e| SnapcartError::InvalidArgument(format!("Task join error: {e}")))??;
        Ok(Some(products))
    }

    /// Poll at the configured interval, invoking `on_update` with each
    /// refreshed list. The callback returns `false` to stop the feed.
    /// Fetch errors also stop it; there is no retry.
    pub async fn run<F>(&self, mut on_update: F) -> Result<()>
    where
        F: FnMut(Vec<Product>) -> bool,
    {
        let mut interval = tokio::time::interval(self.every);
        loop {
            interval.tick().await;
            if let Some(products) = self.tick().await? {
                if !on_update(products) {
                    return Ok(());
                }
            }
        }
    }
}
