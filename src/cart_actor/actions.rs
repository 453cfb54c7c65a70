//! Commands accepted by the cart actor.
//!
//! Each [`CartCommand`] is one of the three engine operations. They are handled by
//! [`ActorState::handle_command`](crate::framework::ActorState::handle_command) on
//! [`CartState`](super::CartState), one at a time.

use crate::model::ProductId;
use crate::notify::Notice;

/// Mutations of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Adds one unit of a product: a new line with amount 1, or +1 on an existing line.
    AddProduct(ProductId),
    /// Drops the line for a product.
    RemoveProduct(ProductId),
    /// Sets the amount of an existing line.
    ///
    /// Amounts below 1 are ignored; use `RemoveProduct` to drop a line.
    UpdateProductAmount { product_id: ProductId, amount: i64 },
}

/// The engine operation a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

impl CartOperation {
    pub fn failure_notice(&self) -> Notice {
        match self {
            CartOperation::Add => Notice::AddFailed,
            CartOperation::Remove => Notice::RemoveFailed,
            CartOperation::Update => Notice::UpdateFailed,
        }
    }
}
