//! # Cart Store
//!
//! The persistent cart: wraps the pure [`Cart`] state machine with
//! snapshot persistence on every mutation and one-time rehydration.
//!
//! ## Persistence Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Persistence Lifecycle                          │
//! │                                                                         │
//! │  STARTUP (once, in open())                                              │
//! │    get("gameshelf-cart")                                                │
//! │        ├── absent ───────────────────────► empty cart                  │
//! │        ├── unreadable / unparsable ──────► empty cart (silent)         │
//! │        └── parsed ──► normalize() ───────► live cart                   │
//! │                       (drop qty <= 0, recompute cached totals)         │
//! │                                                                         │
//! │  EVERY MUTATION                                                         │
//! │    add_to_cart / remove_from_cart / update_quantity / clear_cart       │
//! │        │                                                                │
//! │        ├── mutate in-memory cart (invariant restored by Cart)          │
//! │        └── set("gameshelf-cart", json)  fire and forget                │
//! │              └── on failure: warn! and keep going; the in-memory       │
//! │                  cart stays authoritative for this session             │
//! │                                                                         │
//! │  READS (total / item_count / cart) never touch the medium.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use gameshelf_core::{Cart, Money, Product, DEFAULT_ADD_QUANTITY};

use crate::error::StoreError;
use crate::medium::StorageMedium;
use crate::CART_STORAGE_KEY;

/// The authoritative cart for one session, kept in sync with the medium.
pub struct CartStore {
    cart: Cart,
    medium: Arc<dyn StorageMedium>,
}

impl CartStore {
    /// Opens the store, rehydrating from the persisted snapshot.
    ///
    /// Rehydration happens exactly once, here. A missing, unreadable or
    /// unparsable snapshot silently yields the empty cart; a parsed one is
    /// normalized so the total/count invariant holds even if the snapshot
    /// was edited behind our back.
    pub fn open(medium: Arc<dyn StorageMedium>) -> Self {
        let cart = Self::rehydrate(medium.as_ref());
        CartStore { cart, medium }
    }

    fn rehydrate(medium: &dyn StorageMedium) -> Cart {
        let raw = match medium.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(err) => {
                debug!(error = %err, "cart snapshot unreadable, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(mut cart) => {
                cart.normalize();
                debug!(items = cart.items().len(), "cart rehydrated");
                cart
            }
            Err(err) => {
                debug!(error = %err, "cart snapshot unparsable, starting empty");
                Cart::new()
            }
        }
    }

    /// Adds a product to the cart.
    ///
    /// `quantity` defaults to 1 when not given: every "add to cart"
    /// button adds a single copy; larger quantities come from the cart
    /// page's stepper via [`CartStore::update_quantity`].
    pub fn add_to_cart(&mut self, product: &Product, quantity: Option<i64>) {
        let quantity = quantity.unwrap_or(DEFAULT_ADD_QUANTITY);
        debug!(product_id = %product.id, quantity = %quantity, "add_to_cart");

        self.cart.add(product, quantity);
        self.persist();
    }

    /// Removes a product from the cart. Silent no-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        debug!(product_id = %product_id, "remove_from_cart");

        self.cart.remove(product_id);
        self.persist();
    }

    /// Replaces a line's quantity; zero or below removes the line.
    /// Silent no-op if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        debug!(product_id = %product_id, quantity = %quantity, "update_quantity");

        self.cart.update_quantity(product_id, quantity);
        self.persist();
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");

        self.cart.clear();
        self.persist();
    }

    /// Read-only snapshot of the current cart.
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cached cart total. Not recomputed on read.
    #[inline]
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Cached cart quantity sum. Not recomputed on read.
    #[inline]
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Writes the snapshot, fire and forget.
    ///
    /// A failed write is a degraded session, not a broken one: the
    /// in-memory cart stays authoritative and the next mutation will try
    /// again with the full snapshot.
    fn persist(&self) {
        let result = serde_json::to_string(&self.cart)
            .map_err(StoreError::from)
            .and_then(|raw| self.medium.set(CART_STORAGE_KEY, &raw));

        if let Err(err) = result {
            warn!(error = %err, "cart snapshot write failed");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
