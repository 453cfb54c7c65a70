//! Product and stock lookups against the inventory service.
//!
//! The cart only ever reads from inventory. [`Inventory`] is the seam; [`HttpInventory`]
//! talks to a REST backend and [`InMemoryInventory`] serves a seeded table.

mod http;
mod memory;

pub use http::HttpInventory;
pub use memory::InMemoryInventory;

use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from an inventory lookup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The service has no record for the product.
    #[error("No inventory record for {0}")]
    NotFound(ProductId),

    /// The request never produced a response.
    #[error("Inventory transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Inventory service returned status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("Malformed inventory response: {0}")]
    Malformed(String),
}

/// Read-only access to the product catalogue and stock levels.
#[async_trait]
pub trait Inventory: Send + Sync {
    /// `GET products/{id}`
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, InventoryError>;

    /// `GET stock/{id}`
    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;
}
