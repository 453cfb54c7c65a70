//! # System Lifecycle & Orchestration
//!
//! The composition root for a cart session.
//!
//! **Key Responsibilities:**
//! 1. **Restore** - Load the persisted cart before the actor starts
//! 2. **Dependency Injection** - Hand inventory and notifier to the actor via `run(context)`
//! 3. **Lifecycle Management** - Spawn the actor task and keep its handle
//! 4. **Graceful Shutdown** - Drop the client and await the actor
//!
//! ## The CartSystem Pattern
//!
//! ```rust,ignore
//! let system = CartSystem::start(&config, inventory, storage, notifier)?;
//!
//! // Hand clones of the client to every consumer that needs the cart.
//! let cart = system.cart_client.clone();
//! cart.add_product(ProductId(1)).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Consumers receive a [`CartClient`](crate::clients::CartClient) explicitly; there is
//! no global cart handle.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued commands are handled
//! 3. **Await completion** - Wait for the actor task to finish
//!
//! Clones of the client held elsewhere keep the actor alive; drop them first.

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use tracing::*;
