//! Persisted cart state.
//!
//! The cart item list survives page reloads as a JSON file under the store
//! directory. Writes go to a temp file first and are renamed into place, so
//! an interrupted write never leaves a corrupt cart behind. A corrupt file
//! found on load is deleted and treated as an empty cart.
//!
//! Only the items are persisted. The selection set is session-only state
//! and always starts empty after a reload.

use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::models::CartItem;

/// Loads, saves, and merges the persisted cart item list.
#[derive(Debug)]
pub struct CartStorage {
    /// Directory where the cart file is stored.
    pub store_dir: PathBuf,
}

impl CartStorage {
    /// Create a storage handle.
    ///
    /// If `store_dir` is `None`, uses the platform-appropriate default data
    /// directory. Creates the directory if it does not exist.
    pub fn new(store_dir: Option<PathBuf>) -> Result<Self> {
        let dir = store_dir.unwrap_or_else(config::default_store_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { store_dir: dir })
    }

    fn cart_path(&self) -> PathBuf {
        self.store_dir.join(config::CART_FILE)
    }

    /// Load the persisted cart items.
    ///
    /// A missing file is an empty cart. A corrupt file (truncated write,
    /// disk error) is deleted so the next save starts clean, and an empty
    /// cart is returned.
    pub fn load(&self) -> Result<Vec<CartItem>> {
        let path = self.cart_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        match serde_json::from_str(&contents) {
            Ok(items) => Ok(items),
            Err(e) => {
                eprintln!("Corrupt cart file {}: {} -- removing", path.display(), e);
                let _ = fs::remove_file(&path);
                Ok(Vec::new())
            }
        }
    }

    /// Persist the cart items, replacing any previous file atomically.
    pub fn save(&self, items: &[CartItem]) -> Result<()> {
        let path = self.cart_path();
        let tmp = path.with_extension("json.tmp");

        let result = (|| -> Result<()> {
            let contents = serde_json::to_string_pretty(items)?;
            fs::write(&tmp, contents)?;
            fs::rename(&tmp, &path)?;
            Ok(())
        })();

        if result.is_err() {
            // Clean up the partial temp file on any error
            let _ = fs::remove_file(&tmp);
        }

        result
    }

    /// Merge `incoming` items into the persisted cart and save the result.
    ///
    /// Items are matched by id: an incoming item replaces the saved one,
    /// unknown ids are appended in order. Returns the merged list.
    pub fn merge(&self, incoming: &[CartItem]) -> Result<Vec<CartItem>> {
        let mut items = self.load()?;
        for item in incoming {
            match items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => *existing = item.clone(),
                None => items.push(item.clone()),
            }
        }
        self.save(&items)?;
        Ok(items)
    }

    /// Delete the persisted cart file, if present.
    pub fn clear(&self) -> Result<()> {
        let path = self.cart_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
