//! Durable key-value persistence for the cart snapshot.
//!
//! [`CartStorage`] mirrors a browser-style local store: string values addressed by
//! string keys. [`load_cart`] and [`save_cart`] own the JSON format of the cart.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::model::Cart;
use thiserror::Error;

/// Key under which the cart snapshot is stored unless configured otherwise.
pub const CART_STORAGE_KEY: &str = "@cart-engine:cart";

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A stored value exists but does not parse as a cart.
    #[error("Stored cart under {key:?} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// String key-value store that survives process restarts (for durable backends).
pub trait CartStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads the cart stored under `key`; an absent key is an empty cart.
pub fn load_cart(storage: &dyn CartStorage, key: &str) -> Result<Cart, StorageError> {
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Cart::default()),
    }
}

pub fn save_cart(storage: &dyn CartStorage, key: &str, cart: &Cart) -> Result<(), StorageError> {
    let raw = serde_json::to_string(cart).map_err(StorageError::Serialize)?;
    storage.set(key, &raw)
}
