//! # gameshelf-store: Storage Layer for GameShelf
//!
//! This crate provides persisted state for the GameShelf storefront: a
//! key-value storage medium plus the cart, comment and admin stores built
//! on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GameShelf Data Flow                                │
//! │                                                                         │
//! │  View event (add to cart, post comment, admin form submit)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  gameshelf-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌───────────────┐  │   │
//! │  │   │  Storefront   │   │     Stores     │   │    Medium     │  │   │
//! │  │   │(storefront.rs)│   │ CartStore      │   │ MemoryMedium  │  │   │
//! │  │   │               │──►│ CommentStore   │──►│ FileMedium    │  │   │
//! │  │   │ composition   │   │ AdminStore     │   │ KeyWatcher    │  │   │
//! │  │   │ root          │   │                │   │               │  │   │
//! │  │   └───────────────┘   └────────────────┘   └───────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Key-Value Storage (single JSON file)                │   │
//! │  │   gameshelf-cart  •  comments:<id>  •  admin_extra_products    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`medium`] - The `StorageMedium` trait and its two backends
//! - [`error`] - Storage error types
//! - [`cart_store`] - The persistent cart (rehydrate once, write on mutate)
//! - [`comments`] - Per-product comment lists
//! - [`admin`] - Admin catalog extension and dashboard statistics
//! - [`config`] - Store configuration (shipping, labels)
//! - [`mock`] - The static development catalog, blog content, orders and users
//! - [`storefront`] - Composition root wiring everything together
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use gameshelf_store::{MemoryMedium, Storefront};
//!
//! let medium = Arc::new(MemoryMedium::new());
//! let mut shop = Storefront::with_mock_data(medium);
//!
//! let game = shop.catalog().all()[0].clone();
//! shop.cart_mut().add_to_cart(&game, None);
//!
//! assert_eq!(shop.cart().item_count(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod admin;
pub mod cart_store;
pub mod comments;
pub mod config;
pub mod error;
pub mod medium;
pub mod mock;
pub mod storefront;

// =============================================================================
// Re-exports
// =============================================================================

pub use admin::{AdminStore, DashboardStats, ProductDraft};
pub use cart_store::CartStore;
pub use comments::{Comment, CommentStore};
pub use config::{CheckoutSummary, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use medium::{FileMedium, KeyWatcher, MemoryMedium, StorageMedium};
pub use storefront::Storefront;

// =============================================================================
// Storage Keys
// =============================================================================
// The three key families in the persisted layout. Changing any of these
// strands every snapshot already written under the old name.

/// Key holding the serialized cart snapshot.
pub const CART_STORAGE_KEY: &str = "gameshelf-cart";

/// Key holding the admin-added products array.
pub const EXTRA_PRODUCTS_KEY: &str = "admin_extra_products";

/// Prefix for per-product comment keys.
pub const COMMENTS_KEY_PREFIX: &str = "comments:";

/// Builds the comment key for a product.
///
/// ## Example
/// ```rust
/// use gameshelf_store::comments_key;
///
/// assert_eq!(comments_key("42"), "comments:42");
/// ```
pub fn comments_key(product_id: &str) -> String {
    format!("{}{}", COMMENTS_KEY_PREFIX, product_id)
}
