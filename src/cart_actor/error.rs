//! Error types for the cart actor.

use crate::inventory::InventoryError;
use crate::model::ProductId;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The operation needs the product to be in the cart and it is not.
    #[error("{0} is not in the cart")]
    NotInCart(ProductId),

    /// The requested amount exceeds stock, or stock could not be determined.
    #[error("Requested amount {requested} of {product_id} is not available")]
    OutOfStock { product_id: ProductId, requested: i64 },

    /// The product lookup failed.
    #[error("Failed to fetch {product_id}: {source}")]
    ProductFetch {
        product_id: ProductId,
        #[source]
        source: InventoryError,
    },

    /// The new cart could not be persisted; the live cart was left as it was.
    #[error("Failed to persist cart: {0}")]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// Out-of-stock failures are announced by the stock validator itself.
    pub fn is_already_reported(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
