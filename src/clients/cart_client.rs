//! # Cart Client
//!
//! The consumer-facing handle to the cart. It wraps a `StateClient<CartState>` and
//! exposes the three cart operations plus a snapshot read.
//!
//! Every mutation returns the resulting cart or the [`CartError`] that stopped it.
//! User-facing notices are sent by the actor either way, so callers that only care
//! about the notification channel can ignore the result.

use crate::cart_actor::{CartCommand, CartError, CartState};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::model::{Cart, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<CartState>,
}

impl CartClient {
    pub fn new(inner: StateClient<CartState>) -> Self {
        Self { inner }
    }

    /// Current cart contents.
    pub async fn cart(&self) -> Result<Cart, CartError> {
        self.snapshot().await
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .execute(CartCommand::AddProduct(product_id))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .execute(CartCommand::RemoveProduct(product_id))
            .await
            .map_err(Self::map_error)
    }

    /// Sets the amount of a product already in the cart. Amounts below 1 are a no-op.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .execute(CartCommand::UpdateProductAmount { product_id, amount })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<CartState> {
        &self.inner
    }

    /// Unwraps cart errors raised inside the actor; anything else is a communication error.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StateError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_command, MockClient};
    use crate::model::{CartItem, Product};

    fn one_item_cart() -> Cart {
        Cart::new(vec![CartItem::new(
            Product::new(ProductId(7), "Court", 149.0, "court.png"),
            1,
        )])
    }

    #[tokio::test]
    async fn test_add_product_sends_add_command() {
        let (client, mut receiver) = create_mock_client::<CartState>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.add_product(ProductId(7)).await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert_eq!(command, CartCommand::AddProduct(ProductId(7)));
        responder.send(Ok(one_item_cart())).unwrap();

        let cart = task.await.unwrap().unwrap();
        assert_eq!(cart.amount_of(ProductId(7)), Some(1));
    }

    #[tokio::test]
    async fn test_update_forwards_signed_amount() {
        let (client, mut receiver) = create_mock_client::<CartState>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.update_product_amount(ProductId(5), -1).await });

        let (command, responder) = expect_command(&mut receiver).await.unwrap();
        assert_eq!(
            command,
            CartCommand::UpdateProductAmount {
                product_id: ProductId(5),
                amount: -1
            }
        );
        responder.send(Ok(Cart::default())).unwrap();
        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_cart_error_is_unwrapped() {
        let mut mock = MockClient::<CartState>::new();
        mock.expect_command()
            .return_err(FrameworkError::StateError(Box::new(CartError::NotInCart(ProductId(9)))));
        let cart_client = CartClient::new(mock.client());

        let err = cart_client.remove_product(ProductId(9)).await.unwrap_err();

        assert!(matches!(err, CartError::NotInCart(ProductId(9))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_framework_error_becomes_communication_error() {
        let mut mock = MockClient::<CartState>::new();
        mock.expect_snapshot().return_err(FrameworkError::ActorDropped);
        let cart_client = CartClient::new(mock.client());

        let err = cart_client.cart().await.unwrap_err();

        match err {
            CartError::ActorCommunicationError(msg) => assert!(msg.contains("dropped")),
            other => panic!("Expected ActorCommunicationError, got {other:?}"),
        }
        mock.verify();
    }
}
