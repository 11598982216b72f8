//! # Domain Types
//!
//! Core domain types used throughout GameShelf.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  price (Money)  │   │  items          │   │  username       │       │
//! │  │  stock          │   │  total (Money)  │   │  email          │       │
//! │  │  display flags  │   │  status         │   │  isActive       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │   OrderStatus   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  slug           │   │  Processing     │                             │
//! │  │  (5 fixed)      │   │  Shipped        │                             │
//! │  └─────────────────┘   │  Delivered      │                             │
//! │                        │  Cancelled      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Compatibility
//! The storefront views are TypeScript and the persisted snapshots are plain
//! JSON, so every type here serializes in camelCase with optional fields
//! omitted (not null) when absent. Changing a field name here is a breaking
//! change for both the views and any snapshot already on disk.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A board game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier. Static catalog entries use plain numerics ("1");
    /// admin-added products use the "N-" prefix.
    pub id: String,

    /// Display name shown on listings and the product page.
    pub name: String,

    /// Price in whole currency units.
    pub price: Money,

    /// Primary image path.
    pub image: String,

    /// Optional gallery; when absent the primary image stands alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Long-form description for the product page.
    pub description: String,

    /// Category slug (see [`Category`]).
    pub category: String,

    /// Units on hand. Zero means sold out.
    pub stock: i64,

    /// Player count label, e.g. "2-4 players".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<String>,

    /// Play time label, e.g. "45-60 min".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime: Option<String>,

    /// Minimum age label, e.g. "10+".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_rating: Option<String>,

    /// New-arrival badge flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,

    /// Bestseller badge flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,

    /// Home-page hero flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl Product {
    /// Creates a product with only the required fields set.
    ///
    /// Keeps test and mock construction short; the optional display
    /// metadata stays `None`.
    pub fn basic(id: &str, name: &str, price_units: i64, category: &str, stock: i64) -> Self {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_units(price_units),
            image: format!("/images/{}.jpg", id),
            images: None,
            description: String::new(),
            category: category.to_string(),
            stock,
            players: None,
            playtime: None,
            age_rating: None,
            is_new: None,
            is_popular: None,
            is_featured: None,
        }
    }

    /// Returns the image gallery, falling back to the primary image.
    ///
    /// ## Example
    /// ```rust
    /// use gameshelf_core::types::Product;
    ///
    /// let game = Product::basic("1", "Harbor Masters", 10000, "strategy", 3);
    /// assert_eq!(game.gallery(), vec!["/images/1.jpg".to_string()]);
    /// ```
    pub fn gallery(&self) -> Vec<String> {
        match &self.images {
            Some(images) => images.clone(),
            None => vec![self.image.clone()],
        }
    }

    /// Checks if any units are on hand.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks if stock has fallen below the reorder threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < crate::LOW_STOCK_THRESHOLD
    }

    /// Checks if the requested quantity can be fulfilled from stock.
    ///
    /// ## Note
    /// The cart itself never calls this; quantity ceilings are a caller
    /// concern. See the cart module docs.
    #[inline]
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// New-arrival flag, absent meaning false.
    #[inline]
    pub fn new_arrival(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    /// Bestseller flag, absent meaning false.
    #[inline]
    pub fn popular(&self) -> bool {
        self.is_popular.unwrap_or(false)
    }

    /// Hero flag, absent meaning false.
    #[inline]
    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A catalog category. The slug is the stable identifier used in product
/// records and query filters; the name is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfillment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Paid, awaiting shipment. Dashboard counts these as pending.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled/refunded.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order as the admin dashboard sees it.
/// Line items reuse the cart item shape (product snapshot + quantity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub customer_name: String,
    pub items: Vec<crate::cart::CartItem>,
    pub total: Money,
    pub status: OrderStatus,
    /// Display date label; not parsed anywhere.
    pub date: String,
    pub shipping_cost: Money,
}

// =============================================================================
// User
// =============================================================================

/// A registered customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Display date label; not parsed anywhere.
    pub registration_date: String,
    pub is_active: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
