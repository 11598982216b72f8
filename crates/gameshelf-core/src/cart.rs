//! # Cart
//!
//! The shopping cart state machine: an ordered item list plus cached
//! aggregate totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart State Transitions                             │
//! │                                                                         │
//! │  Storefront Action        Operation                Item List Change     │
//! │  ─────────────────        ─────────                ────────────────     │
//! │                                                                         │
//! │  Click Add to Cart ─────► add() ─────────────────► merge or push       │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ─────► items[i].qty = n    │
//! │                           (n <= 0 removes)                              │
//! │                                                                         │
//! │  Click Remove ──────────► remove() ──────────────► retain(id != p)     │
//! │                                                                         │
//! │  Click Clear ───────────► clear() ───────────────► items.clear()       │
//! │                                                                         │
//! │  EVERY transition ends by recomputing total and itemCount from the     │
//! │  item list. The cached fields are never written any other way.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Cached Totals?
//! The views read `total` and `itemCount` on every render (header badge,
//! cart page, checkout summary). Caching them as fields keeps reads free
//! and keeps the persisted snapshot self-describing; the cost is that every
//! mutation must recompute, which [`Cart::recompute`] centralizes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart: a product snapshot and how many of it.
///
/// ## Design Notes
/// The full product is embedded, not just its id. The cart page renders
/// name, image and price straight from the snapshot, and a persisted cart
/// stays renderable even if the catalog changes underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product data frozen at the time of adding.
    pub product: Product,

    /// Quantity in cart. Always > 0 inside a [`Cart`]; an update to zero
    /// or below removes the line instead.
    pub quantity: i64,
}

impl CartItem {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product merges
///   quantities into the existing line)
/// - Every item quantity is > 0 (an update to zero or below removes it)
/// - `total` always equals Σ (item price × quantity) and `item_count`
///   always equals Σ quantity over the live item list
///
/// The derived fields are private so the invariant cannot be broken from
/// outside; reads go through [`Cart::total`] and [`Cart::item_count`],
/// which return the cached values without recomputing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
    item_count: i64,
}

impl Cart {
    /// Creates a new empty cart (no items, zero total, zero count).
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: adds `quantity` to the
    ///   existing line
    /// - If not: appends a new line at the end (insertion order is kept)
    /// - If the resulting quantity is zero or below: the line is dropped,
    ///   never stored
    ///
    /// No ceiling is enforced against `product.stock` here; quantity
    /// clamping is a caller concern (see [`Product::can_fulfill`]).
    pub fn add(&mut self, product: &Product, quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity,
            });
        }
        self.normalize();
    }

    /// Removes a line from the cart by product id.
    ///
    /// Silent no-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
        self.recompute();
    }

    /// Replaces the quantity of a line in the cart.
    ///
    /// ## Behavior
    /// - If `quantity <= 0`: behaves exactly like [`Cart::remove`]
    /// - If the product is not in the cart: silent no-op
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
            self.recompute();
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Drops non-positive-quantity lines and recomputes the derived fields.
    ///
    /// Called internally after mutations, and by the store layer on a
    /// freshly deserialized snapshot so that externally tampered data
    /// (a hand-edited quantity of 0, a stale cached total) re-enters the
    /// process already satisfying the invariants.
    pub fn normalize(&mut self) {
        self.items.retain(|i| i.quantity > 0);
        self.recompute();
    }

    /// Recomputes `total` and `item_count` from the item list.
    fn recompute(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
    }

    /// The lines currently in the cart, in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Cached sum of line totals. Not recomputed on read.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Cached sum of quantities. Not recomputed on read.
    #[inline]
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_computes_totals() {
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);

        cart.add(&game, 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Money::from_units(20000));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);

        cart.add(&game, 2);
        cart.add(&game, 3);

        assert_eq!(cart.items().len(), 1); // one line, not two
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total(), Money::from_units(50000));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_checkout_scenario() {
        let mut cart = Cart::new();
        let a = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        let b = Product::basic("B", "Night Express", 5000, "mystery", 8);

        cart.add(&a, 2);
        assert_eq!(cart.total(), Money::from_units(20000));
        assert_eq!(cart.item_count(), 2);

        cart.add(&b, 1);
        assert_eq!(cart.total(), Money::from_units(25000));
        assert_eq!(cart.item_count(), 3);

        cart.update_quantity("A", 1);
        assert_eq!(cart.total(), Money::from_units(15000));
        assert_eq!(cart.item_count(), 2);

        cart.remove("B");
        assert_eq!(cart.total(), Money::from_units(10000));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);

        let mut updated = Cart::new();
        updated.add(&game, 2);
        updated.update_quantity("A", 0);

        let mut removed = Cart::new();
        removed.add(&game, 2);
        removed.remove("A");

        assert_eq!(updated, removed);
        assert!(updated.is_empty());
        assert_eq!(updated.total(), Money::zero());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);

        cart.add(&game, 2);
        cart.update_quantity("A", -3);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_remove_missing_is_identity() {
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        cart.add(&game, 2);

        let before = cart.clone();
        cart.remove("nope");

        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_missing_is_identity() {
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        cart.add(&game, 2);

        let before = cart.clone();
        cart.update_quantity("nope", 7);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let a = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        let b = Product::basic("B", "Night Express", 5000, "mystery", 8);

        cart.add(&a, 2);
        cart.add(&b, 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_non_positive_quantity_not_stored() {
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);

        cart.add(&game, 0);
        assert!(cart.is_empty());

        cart.add(&game, -1);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        let a = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        let b = Product::basic("B", "Night Express", 5000, "mystery", 8);
        let c = Product::basic("C", "Orchard Run", 8000, "family", 4);

        cart.add(&a, 1);
        cart.add(&b, 1);
        cart.add(&c, 1);
        cart.add(&b, 2); // merge must not reorder

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_round_trip_serialization() {
        let mut cart = Cart::new();
        let a = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        let b = Product::basic("B", "Night Express", 5000, "mystery", 8);
        cart.add(&a, 2);
        cart.add(&b, 1);

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(back, cart);
        assert_eq!(back.total(), Money::from_units(25000));
        assert_eq!(back.item_count(), 3);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        cart.add(&game, 2);

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.contains("\"itemCount\":2"));
        assert!(json.contains("\"total\":20000"));
        assert!(json.contains("\"quantity\":2"));
    }

    #[test]
    fn test_normalize_repairs_tampered_snapshot() {
        // Hand-edited snapshot: a zero-quantity line and stale cached totals.
        let json = r#"{
            "items": [
                {"product": {"id": "A", "name": "Harbor Masters", "price": 10000,
                             "image": "/images/A.jpg", "description": "",
                             "category": "strategy", "stock": 12},
                 "quantity": 2},
                {"product": {"id": "B", "name": "Night Express", "price": 5000,
                             "image": "/images/B.jpg", "description": "",
                             "category": "mystery", "stock": 8},
                 "quantity": 0}
            ],
            "total": 999999,
            "itemCount": 42
        }"#;

        let mut cart: Cart = serde_json::from_str(json).unwrap();
        cart.normalize();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Money::from_units(20000));
        assert_eq!(cart.item_count(), 2);
    }
}
