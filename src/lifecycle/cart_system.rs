use crate::cart_actor::{self, CartContext, CartState};
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::inventory::Inventory;
use crate::notify::NotificationSink;
use crate::storage::{CartStorage, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while stopping a [`CartSystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for one cart session.
///
/// `CartSystem` is responsible for:
/// - **Restoring** the persisted cart under the configured key
/// - **Wiring** inventory and notifier into the cart actor's context
/// - **Lifecycle Management**: starting and stopping the actor task
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::start(&config, inventory, storage, notifier)?;
/// system.cart_client.add_product(ProductId(7)).await?;
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Restores the cart and spawns its actor.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the persisted cart cannot be read at all. An
    /// unreadable stored value is not an error; the session starts empty.
    pub fn start(
        config: &CartConfig,
        inventory: Arc<dyn Inventory>,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Result<Self, StorageError> {
        let state = CartState::restore(storage, config.storage_key.clone())?;
        let (actor, cart_client) = cart_actor::new(state, config.channel_capacity);

        let context = CartContext::new(inventory, notifier);
        let handle = tokio::spawn(actor.run(context));

        info!(key = %config.storage_key, "Cart system started");
        Ok(Self {
            cart_client,
            handle,
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the channel once every clone is gone, and
    /// waits for the actor to drain its queue and exit.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down cart system...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
