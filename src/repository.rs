//! In-memory holder of the live cart sequence.

use crate::model::{Cart, CartItem, ProductId};

/// Pure state container for the live [`Cart`].
///
/// [`replace`](CartRepository::replace) is the only mutation primitive; callers
/// build the complete next sequence first and swap it in with one call.
#[derive(Debug, Clone, Default)]
pub struct CartRepository {
    cart: Cart,
}

impl CartRepository {
    pub fn new(cart: Cart) -> Self {
        Self { cart }
    }

    /// Linear lookup by product id.
    pub fn find(&self, product_id: ProductId) -> Option<CartItem> {
        self.cart.get(product_id).cloned()
    }

    /// Defensive copy of the live sequence.
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    /// Borrow of the live sequence, for building the next one without a copy.
    pub fn current(&self) -> &Cart {
        &self.cart
    }

    pub fn replace(&mut self, cart: Cart) {
        self.cart = cart;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn item(id: u32, amount: u32) -> CartItem {
        CartItem::new(Product::new(ProductId(id), "Shoe", 99.0, "shoe.png"), amount)
    }

    #[test]
    fn test_find_returns_matching_item() {
        let repository = CartRepository::new(Cart::new(vec![item(1, 1), item(2, 4)]));
        assert_eq!(repository.find(ProductId(2)).map(|i| i.amount), Some(4));
        assert!(repository.find(ProductId(3)).is_none());
    }

    #[test]
    fn test_snapshot_is_detached_from_live_state() {
        let mut repository = CartRepository::new(Cart::new(vec![item(1, 1)]));
        let snapshot = repository.snapshot();

        repository.replace(Cart::default());

        assert_eq!(snapshot.len(), 1);
        assert!(repository.snapshot().is_empty());
    }
}
