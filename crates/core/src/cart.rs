//! The shopping cart: an ordered collection of line items.
//!
//! The cart is a plain value - it is loaded from the visitor's session,
//! mutated, and stored back. All operations are total functions: there is
//! no error path anywhere in this module.
//!
//! # Invariants
//!
//! - One line item per distinct product id; adding an existing id
//!   increments its quantity instead of duplicating the line.
//! - `quantity >= 1` while a line is present; an item reaching quantity 0
//!   is removed, never retained.
//! - Insertion order is preserved; new lines go at the end.
//!
//! Derived values (`item_count`, `total`) are recomputed on every read.
//! Carts are small, so there is nothing to cache.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId, Size};

/// One product-and-size combination in the cart, with a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The catalog product this line refers to.
    pub id: ProductId,
    /// Product name, denormalized for display.
    pub name: String,
    /// Unit price at the time the item was added.
    pub price: Price,
    /// Product image path, denormalized for display.
    pub image: String,
    /// Chosen size, if one was picked.
    pub size: Option<Size>,
    /// Number of units; always >= 1 while the line exists.
    pub quantity: u32,
}

impl LineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A product reference to add to the cart (everything but the quantity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub size: Option<Size>,
}

impl NewItem {
    /// Build a cart entry from a catalog product.
    #[must_use]
    pub fn from_product(product: &Product, size: Option<Size>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            size,
        }
    }
}

/// Ordered collection of [`LineItem`]s.
///
/// Created empty at session start, mutated by the cart routes, cleared on
/// successful checkout. Never persisted beyond the in-memory session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// If a line with the same id already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended.
    /// Always succeeds.
    pub fn add_item(&mut self, item: NewItem) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity += 1;
        } else {
            self.items.push(LineItem {
                id: item.id,
                name: item.name,
                price: item.price,
                image: item.image,
                size: item.size,
                quantity: 1,
            });
        }
    }

    /// Remove the line with the given id. No-op if absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|line| line.id != *id);
    }

    /// Set the quantity of the line with the given id.
    ///
    /// A quantity of 0 removes the line, same as [`Self::remove_item`].
    /// Negative quantities are unrepresentable: the quantity is `u32` all
    /// the way from form deserialization down.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
        } else if let Some(line) = self.items.iter_mut().find(|line| line.id == *id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items
            .iter()
            .fold(Price::zero(), |acc, line| {
                Price::new(acc.amount + line.line_total().amount, acc.currency_code)
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bra(id: &str, dollars: i64) -> NewItem {
        NewItem {
            id: ProductId::new(id),
            name: format!("FlexCore {id}"),
            price: Price::from_dollars(dollars),
            image: format!("/static/images/products/{id}.jpg"),
            size: None,
        }
    }

    #[test]
    fn test_add_same_id_increments_quantity() {
        let mut cart = Cart::new();
        cart.add_item(bra("1", 89));
        cart.add_item(bra("1", 89));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().to_string(), "$178.00");
    }

    #[test]
    fn test_repeated_adds_equal_call_count() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_item(bra("2", 95));
        }
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Price::from_dollars(475));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(bra("3", 79));
        cart.add_item(bra("1", 89));
        cart.add_item(bra("3", 79));
        cart.add_item(bra("2", 95));

        let ids: Vec<&str> = cart.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(bra("1", 89));
        cart.update_quantity(&ProductId::new("1"), 3);

        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.total().to_string(), "$267.00");
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut cart = Cart::new();
        cart.add_item(bra("1", 89));
        cart.add_item(bra("2", 95));
        cart.add_item(bra("1", 89));
        let before = cart.item_count();

        let mut via_update = cart.clone();
        via_update.update_quantity(&ProductId::new("1"), 0);

        let mut via_remove = cart.clone();
        via_remove.remove_item(&ProductId::new("1"));

        assert_eq!(via_update, via_remove);
        assert_eq!(via_update.item_count(), before - 2);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(bra("1", 89));
        cart.update_quantity(&ProductId::new("99"), 4);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(bra("1", 89));
        cart.remove_item(&ProductId::new("99"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add_item(bra("1", 89));
        cart.add_item(bra("2", 95));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::zero());
    }

    #[test]
    fn test_total_mixes_lines() {
        let mut cart = Cart::new();
        cart.add_item(bra("1", 89));
        cart.add_item(bra("1", 89));
        cart.add_item(bra("5", 69));
        // 2 x 89 + 1 x 69
        assert_eq!(cart.total(), Price::from_dollars(247));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_session_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add_item(NewItem {
            size: Some(Size::M),
            ..bra("4", 99)
        });
        cart.add_item(bra("4", 99));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
        assert_eq!(back.items()[0].size, Some(Size::M));
    }
}
