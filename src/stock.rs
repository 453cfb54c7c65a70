//! Stock gate consulted before any quantity-increasing mutation.

use crate::inventory::Inventory;
use crate::model::ProductId;
use crate::notify::{Notice, NotificationSink};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Answers whether a requested quantity of a product is available.
///
/// Every call fetches a fresh stock record; nothing is cached. When the answer is
/// `false` the validator has already emitted one [`Notice::OutOfStock`], whether
/// the stock was insufficient or could not be determined at all.
#[derive(Clone)]
pub struct StockValidator {
    inventory: Arc<dyn Inventory>,
    notifier: Arc<dyn NotificationSink>,
}

impl StockValidator {
    pub fn new(inventory: Arc<dyn Inventory>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            inventory,
            notifier,
        }
    }

    #[instrument(skip(self))]
    pub async fn check_availability(&self, product_id: ProductId, requested: u32) -> bool {
        match self.inventory.fetch_stock(product_id).await {
            Ok(stock) if stock.covers(requested) => {
                debug!(available = stock.amount, "In stock");
                true
            }
            Ok(stock) => {
                debug!(available = stock.amount, "Insufficient stock");
                self.notifier.notify(Notice::OutOfStock);
                false
            }
            Err(e) => {
                warn!(error = %e, "Stock lookup failed");
                self.notifier.notify(Notice::OutOfStock);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InMemoryInventory;
    use crate::model::Product;
    use crate::notify::RecordingSink;

    fn validator(inventory: InMemoryInventory) -> (StockValidator, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (StockValidator::new(Arc::new(inventory), sink.clone()), sink)
    }

    #[tokio::test]
    async fn test_available_amount_passes_silently() {
        let (validator, sink) = validator(
            InMemoryInventory::new().with_product(Product::new(ProductId(7), "Trail", 199.0, "t.png"), 2),
        );

        assert!(validator.check_availability(ProductId(7), 2).await);
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn test_excess_amount_fails_with_one_notice() {
        let (validator, sink) = validator(
            InMemoryInventory::new().with_product(Product::new(ProductId(7), "Trail", 199.0, "t.png"), 1),
        );

        assert!(!validator.check_availability(ProductId(7), 2).await);
        assert_eq!(sink.messages(), vec![Notice::OutOfStock.to_string()]);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_reported_as_out_of_stock() {
        let (validator, sink) = validator(InMemoryInventory::new());

        assert!(!validator.check_availability(ProductId(404), 1).await);
        assert_eq!(sink.messages(), vec![Notice::OutOfStock.to_string()]);
    }
}
