//! Cart line items and the ordered cart sequence.
//!
//! A [`Cart`] is a value: every mutation helper returns a new sequence and leaves
//! `self` untouched, which is what lets the engine build the next state in full
//! before committing it.

use super::{Product, ProductId};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

const AMOUNT_FIELD: &str = "amount";

/// A single cart entry.
///
/// Serialized flat: all product fields followed by `amount`. The line's own
/// amount replaces any `amount` the product carried.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartItem {
    pub fn new(mut product: Product, amount: u32) -> Self {
        product.extra.remove(AMOUNT_FIELD);
        Self { product, amount }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

impl Serialize for CartItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let product = &self.product;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &product.id)?;
        map.serialize_entry("title", &product.title)?;
        map.serialize_entry("price", &product.price)?;
        map.serialize_entry("image", &product.image)?;
        for (key, value) in product.extra.iter().filter(|(key, _)| *key != AMOUNT_FIELD) {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(AMOUNT_FIELD, &self.amount)?;
        map.end()
    }
}

/// Ordered sequence of cart items, in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id() == product_id)
    }

    /// Amount held for `product_id`, if present.
    pub fn amount_of(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|item| item.amount)
    }

    /// Sum of all amounts.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Sum of `price * amount` over all items.
    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.product.price * f64::from(item.amount))
            .sum()
    }

    /// New cart with `item` appended at the end.
    pub fn with_item(&self, item: CartItem) -> Cart {
        let mut items = self.items.clone();
        items.push(item);
        Cart { items }
    }

    /// New cart without any item for `product_id`.
    pub fn without(&self, product_id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|item| item.product_id() != product_id)
                .cloned()
                .collect(),
        }
    }

    /// New cart where only the item for `product_id` carries `amount`; positions are kept.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .map(|item| {
                    if item.product_id() == product_id {
                        CartItem::new(item.product.clone(), amount)
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: u32, amount: u32) -> CartItem {
        CartItem::new(Product::new(ProductId(id), format!("Shoe {id}"), 10.0, ""), amount)
    }

    #[test]
    fn test_builders_leave_receiver_untouched() {
        let cart = Cart::new(vec![item(3, 1), item(5, 1)]);

        let updated = cart.with_amount(ProductId(5), 3);
        let removed = cart.without(ProductId(3));
        let appended = cart.with_item(item(9, 1));

        assert_eq!(cart.amount_of(ProductId(5)), Some(1));
        assert_eq!(updated.amount_of(ProductId(5)), Some(3));
        assert_eq!(updated.items()[0].product_id(), ProductId(3));
        assert_eq!(removed.len(), 1);
        assert_eq!(appended.items()[2].product_id(), ProductId(9));
    }

    #[test]
    fn test_totals() {
        let cart = Cart::new(vec![item(1, 2), item(2, 3)]);
        assert_eq!(cart.total_units(), 5);
        assert!((cart.subtotal() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialized_shape_is_flat_array() {
        let cart = Cart::new(vec![item(7, 2)]);
        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            value,
            json!([{ "id": 7, "title": "Shoe 7", "price": 10.0, "image": "", "amount": 2 }])
        );

        let restored: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_line_amount_replaces_product_amount() {
        let product: Product = serde_json::from_value(json!({
            "id": 7, "title": "Shoe", "price": 10.0, "image": "x", "amount": 50, "brand": "Acme"
        }))
        .unwrap();

        let item = CartItem::new(product, 1);
        assert!(!item.product.extra.contains_key("amount"));

        let raw = serde_json::to_string(&Cart::new(vec![item.clone()])).unwrap();
        assert_eq!(raw.matches("\"amount\"").count(), 1);

        let restored: Cart = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored.items(), &[item]);
        assert_eq!(restored.items()[0].product.extra.get("brand"), Some(&json!("Acme")));
    }

    #[test]
    fn test_direct_literal_still_writes_amount_once() {
        let mut product = Product::new(ProductId(2), "Boot", 20.0, "");
        product.extra.insert("amount".into(), json!(9));
        let item = CartItem { product, amount: 3 };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["amount"], json!(3));
    }
}
