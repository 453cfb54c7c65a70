//! Session configuration loaded from environment variables.

use crate::storage::CART_STORAGE_KEY;
use std::path::PathBuf;

/// Cart session configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `CART_STORAGE_KEY`: key of the persisted cart (default: `"@cart-engine:cart"`)
/// - `CART_STORAGE_DIR`: directory for file-backed storage (default: `"./.cart"`)
/// - `CART_INVENTORY_URL`: base URL of the inventory service (default: unset)
/// - `CART_CHANNEL_CAPACITY`: cart actor queue size (default: `32`)
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub storage_key: String,
    pub storage_dir: PathBuf,
    pub inventory_url: Option<String>,
    pub channel_capacity: usize,
}

impl CartConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            storage_key: lookup("CART_STORAGE_KEY").unwrap_or(defaults.storage_key),
            storage_dir: lookup("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            inventory_url: lookup("CART_INVENTORY_URL").filter(|url| !url.trim().is_empty()),
            channel_capacity: lookup("CART_CHANNEL_CAPACITY")
                .and_then(|c| c.parse().ok())
                .filter(|&c| c > 0)
                .unwrap_or(defaults.channel_capacity),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            storage_dir: PathBuf::from("./.cart"),
            inventory_url: None,
            channel_capacity: 32,
        }
    }
}
