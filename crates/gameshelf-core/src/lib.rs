//! # gameshelf-core: Pure Business Logic for GameShelf
//!
//! This crate is the **heart** of the GameShelf storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GameShelf Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript views)                    │   │
//! │  │    Explore ──► Product Page ──► Cart Page ──► Admin Panel      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 gameshelf-store (Storefront)                    │   │
//! │  │    CartStore, CommentStore, AdminStore over the KV medium      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gameshelf-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  queries  │  │   │
//! │  │   │   Order   │  │  folding  │  │ CartItem  │  │   sorts   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Order, User)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state machine with cached derived totals
//! - [`catalog`] - Linear-scan catalog queries and sorts
//! - [`blog`] - Blog posts, categories and their listing queries
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole currency units (i64)
//! 4. **Cached Projections**: Cart totals are recomputed on every mutation,
//!    never on read, and never drift from the item list
//!
//! ## Example Usage
//!
//! ```rust
//! use gameshelf_core::cart::Cart;
//! use gameshelf_core::money::Money;
//! use gameshelf_core::types::Product;
//!
//! let game = Product::basic("G-1", "Settlers of the Valley", 10000, "strategy", 12);
//!
//! let mut cart = Cart::new();
//! cart.add(&game, 2);
//!
//! assert_eq!(cart.total(), Money::from_units(20000));
//! assert_eq!(cart.item_count(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod blog;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gameshelf_core::Money` instead of
// `use gameshelf_core::money::Money`

pub use blog::{Blog, BlogCategory, BlogPost, BlogQuery};
pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, ProductQuery, SortKey};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which a product counts as "low stock".
///
/// ## Business Reason
/// The admin dashboard flags products that need restocking. Five units is
/// the threshold the buying team works with for slow-moving board games.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Quantity used when a caller adds a product without specifying one.
///
/// ## Business Reason
/// Every "add to cart" button in the storefront adds a single copy; bulk
/// quantities are only reachable through the cart's quantity stepper.
pub const DEFAULT_ADD_QUANTITY: i64 = 1;
