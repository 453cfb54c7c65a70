use super::{Inventory, InventoryError};
use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// [`Inventory`] serving a seeded product and stock table.
///
/// Stock can be changed at runtime with [`set_stock`](InMemoryInventory::set_stock).
/// Products registered without a stock record answer `NotFound` on stock lookups.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    products: RwLock<HashMap<ProductId, Product>>,
    stock: RwLock<HashMap<ProductId, i64>>,
    stock_requests: AtomicUsize,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a product together with its stock level.
    pub fn with_product(mut self, product: Product, amount: i64) -> Self {
        self.stock.get_mut().insert(product.id, amount);
        self.products.get_mut().insert(product.id, product);
        self
    }

    /// Seeds a product that has no stock record.
    pub fn with_product_unstocked(mut self, product: Product) -> Self {
        self.products.get_mut().insert(product.id, product);
        self
    }

    pub async fn set_stock(&self, product_id: ProductId, amount: i64) {
        self.stock.write().await.insert(product_id, amount);
    }

    /// Number of stock lookups served so far.
    pub fn stock_requests(&self) -> usize {
        self.stock_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Inventory for InMemoryInventory {
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, InventoryError> {
        self.products
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(InventoryError::NotFound(product_id))
    }

    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        self.stock_requests.fetch_add(1, Ordering::SeqCst);
        self.stock
            .read()
            .await
            .get(&product_id)
            .map(|&amount| Stock { amount })
            .ok_or(InventoryError::NotFound(product_id))
    }
}
