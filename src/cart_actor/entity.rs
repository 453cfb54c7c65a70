//! [`ActorState`] implementation for the cart.
//!
//! Every operation validates first and commits last. A commit writes the new
//! sequence to storage and only then swaps it into the repository, so a failed
//! write leaves both views on the previous cart.

use super::actions::{CartCommand, CartOperation};
use super::error::CartError;
use crate::framework::ActorState;
use crate::inventory::Inventory;
use crate::model::{Cart, CartItem, ProductId};
use crate::notify::{Notice, NotificationSink};
use crate::repository::CartRepository;
use crate::stock::StockValidator;
use crate::storage::{load_cart, save_cart, CartStorage, StorageError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dependencies injected into the cart actor at `run()` time.
#[derive(Clone)]
pub struct CartContext {
    pub inventory: Arc<dyn Inventory>,
    pub validator: StockValidator,
    pub notifier: Arc<dyn NotificationSink>,
}

impl CartContext {
    pub fn new(inventory: Arc<dyn Inventory>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            validator: StockValidator::new(inventory.clone(), notifier.clone()),
            inventory,
            notifier,
        }
    }
}

/// The live cart plus the storage it is committed to.
pub struct CartState {
    repository: CartRepository,
    storage: Arc<dyn CartStorage>,
    storage_key: String,
}

impl CartState {
    pub fn new(cart: Cart, storage: Arc<dyn CartStorage>, storage_key: impl Into<String>) -> Self {
        Self {
            repository: CartRepository::new(cart),
            storage,
            storage_key: storage_key.into(),
        }
    }

    /// Restores the cart stored under `storage_key`.
    ///
    /// A missing value gives an empty cart. A corrupt value is logged and also gives
    /// an empty cart; it stays on disk until the next successful commit replaces it.
    pub fn restore(
        storage: Arc<dyn CartStorage>,
        storage_key: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let storage_key = storage_key.into();
        let cart = match load_cart(storage.as_ref(), &storage_key) {
            Ok(cart) => cart,
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!(error = %e, "Discarding unreadable cart");
                Cart::default()
            }
            Err(e) => return Err(e),
        };
        info!(key = %storage_key, items = cart.len(), "Cart restored");
        Ok(Self::new(cart, storage, storage_key))
    }

    async fn add_product(&mut self, product_id: ProductId, ctx: &CartContext) -> Result<Cart, CartError> {
        if let Some(existing) = self.repository.find(product_id) {
            let next_amount = i64::from(existing.amount) + 1;
            return self.update_product_amount(product_id, next_amount, ctx).await;
        }

        let result = self.insert_new(product_id, ctx).await;
        report_failure(CartOperation::Add, &result, ctx);
        result
    }

    async fn insert_new(&mut self, product_id: ProductId, ctx: &CartContext) -> Result<Cart, CartError> {
        let product = ctx
            .inventory
            .fetch_product(product_id)
            .await
            .map_err(|source| CartError::ProductFetch { product_id, source })?;

        if !ctx.validator.check_availability(product_id, 1).await {
            return Err(CartError::OutOfStock {
                product_id,
                requested: 1,
            });
        }

        let next = self.repository.current().with_item(CartItem::new(product, 1));
        self.commit(next)
    }

    fn remove_product(&mut self, product_id: ProductId, ctx: &CartContext) -> Result<Cart, CartError> {
        let result = match self.repository.find(product_id) {
            Some(_) => {
                let next = self.repository.current().without(product_id);
                self.commit(next)
            }
            None => Err(CartError::NotInCart(product_id)),
        };
        report_failure(CartOperation::Remove, &result, ctx);
        result
    }

    async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
        ctx: &CartContext,
    ) -> Result<Cart, CartError> {
        if amount < 1 {
            debug!(%product_id, amount, "Ignoring amount below 1");
            return Ok(self.repository.snapshot());
        }

        let result = self.set_amount(product_id, amount, ctx).await;
        report_failure(CartOperation::Update, &result, ctx);
        result
    }

    async fn set_amount(&mut self, product_id: ProductId, amount: i64, ctx: &CartContext) -> Result<Cart, CartError> {
        if self.repository.find(product_id).is_none() {
            return Err(CartError::NotInCart(product_id));
        }

        let out_of_stock = CartError::OutOfStock {
            product_id,
            requested: amount,
        };
        let Ok(requested) = u32::try_from(amount) else {
            ctx.notifier.notify(Notice::OutOfStock);
            return Err(out_of_stock);
        };
        if !ctx.validator.check_availability(product_id, requested).await {
            return Err(out_of_stock);
        }

        let next = self.repository.current().with_amount(product_id, requested);
        self.commit(next)
    }

    /// Persists `next`, then makes it the live cart.
    fn commit(&mut self, next: Cart) -> Result<Cart, CartError> {
        save_cart(self.storage.as_ref(), &self.storage_key, &next)?;
        self.repository.replace(next.clone());
        info!(items = next.len(), units = next.total_units(), "Cart committed");
        Ok(next)
    }
}

/// Logs a failed operation and sends its notice, unless the validator already did.
fn report_failure(operation: CartOperation, result: &Result<Cart, CartError>, ctx: &CartContext) {
    if let Err(e) = result {
        warn!(?operation, error = %e, "Cart operation failed");
        if !e.is_already_reported() {
            ctx.notifier.notify(operation.failure_notice());
        }
    }
}

#[async_trait]
impl ActorState for CartState {
    type Snapshot = Cart;
    type Command = CartCommand;
    type Reply = Cart;
    type Context = CartContext;
    type Error = CartError;

    fn snapshot(&self) -> Cart {
        self.repository.snapshot()
    }

    async fn handle_command(&mut self, command: CartCommand, ctx: &CartContext) -> Result<Cart, CartError> {
        match command {
            CartCommand::AddProduct(product_id) => self.add_product(product_id, ctx).await,
            CartCommand::RemoveProduct(product_id) => self.remove_product(product_id, ctx),
            CartCommand::UpdateProductAmount { product_id, amount } => {
                self.update_product_amount(product_id, amount, ctx).await
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
    use crate::storage::{MemoryStorage, CART_STORAGE_KEY};

    /// Storage whose writes always fail.
    struct ReadOnlyStorage;

    impl CartStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn shoe(id: u32) -> Product {
        Product::new(ProductId(id), format!("Shoe {id}"), 100.0, format!("{id}.png"))
    }

    fn context(inventory: InMemoryInventory) -> (CartContext, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (CartContext::new(Arc::new(inventory), sink.clone()), sink)
    }

    #[tokio::test]
    async fn test_failed_write_keeps_live_cart() {
        let (ctx, sink) = context(InMemoryInventory::new().with_product(shoe(1), 5));
        let mut state = CartState::new(Cart::default(), Arc::new(ReadOnlyStorage), CART_STORAGE_KEY);

        let err = state
            .handle_command(CartCommand::AddProduct(ProductId(1)), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::Storage(_)));
        assert!(state.snapshot().is_empty());
        assert_eq!(sink.messages(), vec![Notice::AddFailed.to_string()]);
    }

    #[tokio::test]
    async fn test_amount_beyond_u32_is_out_of_stock() {
        let (ctx, sink) = context(InMemoryInventory::new().with_product(shoe(1), 5));
        let cart = Cart::new(vec![CartItem::new(shoe(1), 1)]);
        let mut state = CartState::new(cart.clone(), Arc::new(MemoryStorage::new()), CART_STORAGE_KEY);

        let err = state
            .handle_command(
                CartCommand::UpdateProductAmount {
                    product_id: ProductId(1),
                    amount: i64::from(u32::MAX) + 1,
                },
                &ctx,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::OutOfStock { .. }));
        assert_eq!(state.snapshot(), cart);
        assert_eq!(sink.messages(), vec![Notice::OutOfStock.to_string()]);
    }

    #[tokio::test]
    async fn test_restore_discards_corrupt_value() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(CART_STORAGE_KEY, "not a cart").unwrap();

        let state = CartState::restore(storage.clone(), CART_STORAGE_KEY).unwrap();

        assert!(state.snapshot().is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("not a cart"));
    }
}
