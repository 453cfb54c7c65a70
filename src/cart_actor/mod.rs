//! # Cart Actor
//!
//! The cart mutation engine, hosted by a [`StateActor`](crate::framework::StateActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`CartState`] and its [`ActorState`](crate::framework::ActorState) implementation
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartCommand`] and [`CartOperation`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Ordering
//!
//! The actor handles one command at a time, including the awaited stock and product
//! lookups. Two concurrent `AddProduct` commands for the same product therefore both
//! land: the second sees the amount written by the first.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cart_engine::cart_actor::{self, CartContext, CartState};
//! use cart_engine::inventory::InMemoryInventory;
//! use cart_engine::model::ProductId;
//! use cart_engine::notify::TracingSink;
//! use cart_engine::storage::{MemoryStorage, CART_STORAGE_KEY};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = CartState::restore(Arc::new(MemoryStorage::new()), CART_STORAGE_KEY)?;
//!     let (actor, client) = cart_actor::new(state, 32);
//!
//!     let context = CartContext::new(Arc::new(InMemoryInventory::new()), Arc::new(TracingSink));
//!     tokio::spawn(actor.run(context));
//!
//!     let _ = client.add_product(ProductId(1)).await;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::StateActor;

/// Creates a new Cart actor around `state` and its client.
pub fn new(state: CartState, buffer_size: usize) -> (StateActor<CartState>, CartClient) {
    let (actor, generic_client) = StateActor::new(state, buffer_size);
    (actor, CartClient::new(generic_client))
}
