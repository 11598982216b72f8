//! # Admin Store
//!
//! The admin panel's slice of state: products added through the admin form
//! (stored separately from the static catalog) plus the dashboard numbers.
//!
//! ## Catalog Extension Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Admin Catalog Extension                               │
//! │                                                                         │
//! │   static catalog (mock.rs)      admin_extra_products (medium key)      │
//! │   ────────────────────────      ──────────────────────────────────     │
//! │   read-only, compiled in        written ONLY by add_product()          │
//! │         │                              │                               │
//! │         └──────────┬───────────────────┘                               │
//! │                    ▼                                                   │
//! │        all_products() = catalog ++ extras   (admin listing order)      │
//! │                                                                         │
//! │   Another process may rewrite the key; refresh() polls a KeyWatcher    │
//! │   and reloads the local copy. Read-only observation, last write wins.  │
//! │   There is no remove operation: the admin panel only ever adds.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use gameshelf_core::validation::{
    validate_category, validate_image, validate_price, validate_product_name,
};
use gameshelf_core::{Catalog, Money, Order, OrderStatus, Product, User, ValidationResult};

use crate::error::StoreError;
use crate::medium::{KeyWatcher, StorageMedium};
use crate::EXTRA_PRODUCTS_KEY;

// =============================================================================
// Product Draft
// =============================================================================

/// The "new product" form payload, field for field.
///
/// Text inputs arrive as strings that may be blank; the checkbox flags are
/// always present. [`AdminStore::add_product`] turns a valid draft into a
/// real [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: String,
    pub price: Money,
    pub image: String,
    /// Optional gallery; an empty or missing list falls back to `image`.
    pub images: Option<Vec<String>>,
    pub description: String,
    pub category: String,
    /// Blank field means zero stock.
    pub stock: Option<i64>,
    pub players: String,
    pub playtime: String,
    pub age_rating: String,
    pub is_new: bool,
    pub is_popular: bool,
    pub is_featured: bool,
}

impl Default for ProductDraft {
    /// The form's initial state: placeholder image, first category
    /// preselected, everything else blank.
    fn default() -> Self {
        ProductDraft {
            name: String::new(),
            price: Money::zero(),
            image: "/images/product-placeholder.svg".to_string(),
            images: None,
            description: String::new(),
            category: "strategy".to_string(),
            stock: None,
            players: String::new(),
            playtime: String::new(),
            age_rating: String::new(),
            is_new: false,
            is_popular: false,
            is_featured: false,
        }
    }
}

impl ProductDraft {
    /// Runs the form's submit rules.
    ///
    /// ## Rules
    /// - name: at least 2 characters after trimming
    /// - price: strictly positive
    /// - image: non-empty
    /// - category: non-empty
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_price(self.price)?;
        validate_image(&self.image)?;
        validate_category(&self.category)?;
        Ok(())
    }
}

// =============================================================================
// Dashboard Stats
// =============================================================================

/// The dashboard's headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Static catalog plus admin extras.
    pub total_products: usize,
    pub total_orders: usize,
    pub total_users: usize,
    /// Sum of order totals across all statuses.
    pub total_revenue: Money,
    /// Merged products whose stock is below the reorder threshold.
    pub low_stock_products: usize,
    /// Orders still in `processing`.
    pub pending_orders: usize,
}

// =============================================================================
// Admin Store
// =============================================================================

/// Admin-added products over the medium, plus dashboard computations.
pub struct AdminStore {
    medium: Arc<dyn StorageMedium>,
    extras: Vec<Product>,
    watcher: KeyWatcher,
}

impl AdminStore {
    /// Opens the store, loading whatever extras are already persisted.
    ///
    /// Missing or corrupt stored data silently reads as "no extras".
    pub fn open(medium: Arc<dyn StorageMedium>) -> Self {
        let extras = Self::load_extras(medium.as_ref());
        let watcher = KeyWatcher::new(medium.as_ref(), EXTRA_PRODUCTS_KEY);
        debug!(extras = extras.len(), "admin store opened");

        AdminStore {
            medium,
            extras,
            watcher,
        }
    }

    /// The admin-added products currently loaded.
    #[inline]
    pub fn extras(&self) -> &[Product] {
        &self.extras
    }

    /// Adds a product through the admin form.
    ///
    /// ## Behavior
    /// - Validates the draft; an invalid draft changes nothing
    /// - Builds the product: `N-` prefixed UUID id, trimmed name and
    ///   description, gallery falling back to the primary image, blank
    ///   display fields dropped, absent stock meaning zero
    /// - Appends to the persisted array (a corrupt stored array is
    ///   treated as empty and overwritten) and keeps the local copy
    ///   in sync
    pub fn add_product(&mut self, draft: ProductDraft) -> ValidationResult<Product> {
        draft.validate()?;

        let images = match &draft.images {
            Some(images) if !images.is_empty() => images.clone(),
            _ => vec![draft.image.clone()],
        };

        let product = Product {
            id: format!("N-{}", Uuid::new_v4()),
            name: draft.name.trim().to_string(),
            price: draft.price,
            image: draft.image,
            images: Some(images),
            description: draft.description.trim().to_string(),
            category: draft.category,
            stock: draft.stock.unwrap_or(0),
            players: blank_to_none(&draft.players),
            playtime: blank_to_none(&draft.playtime),
            age_rating: blank_to_none(&draft.age_rating),
            is_new: Some(draft.is_new),
            is_popular: Some(draft.is_popular),
            is_featured: Some(draft.is_featured),
        };

        info!(product_id = %product.id, name = %product.name, "admin product added");

        // Re-read before appending so a write from another process between
        // our load and now is not clobbered.
        let mut extras = Self::load_extras(self.medium.as_ref());
        extras.push(product.clone());
        self.persist(&extras);
        self.extras = extras;

        // Our own write must not count as an external change next refresh.
        self.watcher.check(self.medium.as_ref());

        Ok(product)
    }

    /// Polls for writes to the extras key made by another process.
    ///
    /// ## Returns
    /// `true` when the local copy was reloaded: a new value replaces it,
    /// a removal resets it to empty. A changed-but-unparsable value keeps
    /// the current copy and returns `false`.
    pub fn refresh(&mut self) -> bool {
        match self.watcher.check(self.medium.as_ref()) {
            Some(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(extras) => {
                    self.extras = extras;
                    debug!(extras = self.extras.len(), "extras reloaded from external write");
                    true
                }
                Err(err) => {
                    debug!(error = %err, "external extras write unparsable, keeping current");
                    false
                }
            },
            Some(None) => {
                self.extras = Vec::new();
                debug!("extras key removed externally, reset to empty");
                true
            }
            None => false,
        }
    }

    /// The admin product listing: static catalog first, then extras.
    pub fn all_products<'a>(&'a self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.all().iter().chain(self.extras.iter()).collect()
    }

    /// Computes the dashboard's headline numbers.
    pub fn dashboard_stats(
        &self,
        catalog: &Catalog,
        orders: &[Order],
        users: &[User],
    ) -> DashboardStats {
        let merged_low_stock = catalog
            .all()
            .iter()
            .chain(self.extras.iter())
            .filter(|p| p.is_low_stock())
            .count();

        DashboardStats {
            total_products: catalog.len() + self.extras.len(),
            total_orders: orders.len(),
            total_users: users.len(),
            total_revenue: orders.iter().map(|o| o.total).sum(),
            low_stock_products: merged_low_stock,
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Processing)
                .count(),
        }
    }

    fn load_extras(medium: &dyn StorageMedium) -> Vec<Product> {
        let raw = match medium.get(EXTRA_PRODUCTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                debug!(error = %err, "extras unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(extras) => extras,
            Err(err) => {
                debug!(error = %err, "extras unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, extras: &[Product]) {
        let result = serde_json::to_string(extras)
            .map_err(StoreError::from)
            .and_then(|raw| self.medium.set(EXTRA_PRODUCTS_KEY, &raw));

        if let Err(err) = result {
            warn!(error = %err, "extras write failed");
        }
    }
}

// =============================================================================
// Listing Helpers
// =============================================================================

/// The admin table's name-only search: case-insensitive containment.
/// An empty term matches everything.
pub fn search_by_name<'a>(products: &[&'a Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// The dashboard's recent-orders table: the first `n` orders.
pub fn recent_orders(orders: &[Order], n: usize) -> &[Order] {
    &orders[..orders.len().min(n)]
}

fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use gameshelf_core::CartItem;

    fn medium() -> Arc<MemoryMedium> {
        Arc::new(MemoryMedium::new())
    }

    fn draft(name: &str, price_units: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: Money::from_units(price_units),
            image: "/images/new-game.jpg".to_string(),
            category: "party".to_string(),
            ..Default::default()
        }
    }

    fn order(id: &str, total_units: i64, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            user_id: "u1".to_string(),
            customer_name: "Sam Porter".to_string(),
            items: Vec::<CartItem>::new(),
            total: Money::from_units(total_units),
            status,
            date: "2025-03-02".to_string(),
            shipping_cost: Money::from_units(50000),
        }
    }

    #[test]
    fn test_add_product_builds_and_persists() {
        let medium = medium();
        let mut store = AdminStore::open(medium.clone());

        let mut submitted = draft("  Goblin Market  ", 42000);
        submitted.stock = Some(9);
        submitted.players = " 3-6 players ".to_string();
        submitted.playtime = "   ".to_string();
        submitted.is_new = true;

        let product = store.add_product(submitted).unwrap();

        assert!(product.id.starts_with("N-"));
        assert_eq!(product.name, "Goblin Market");
        assert_eq!(product.images, Some(vec!["/images/new-game.jpg".to_string()]));
        assert_eq!(product.stock, 9);
        assert_eq!(product.players.as_deref(), Some("3-6 players"));
        assert!(product.playtime.is_none()); // blank collapses to absent
        assert_eq!(product.is_new, Some(true));
        assert_eq!(product.is_featured, Some(false));

        assert_eq!(store.extras().len(), 1);

        // Persisted as a JSON array under the extras key.
        let raw = medium.get(EXTRA_PRODUCTS_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("Goblin Market"));
    }

    #[test]
    fn test_add_product_default_stock_is_zero() {
        let mut store = AdminStore::open(medium());
        let product = store.add_product(draft("Night Market", 30000)).unwrap();
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_add_product_rejects_invalid_drafts() {
        let mut store = AdminStore::open(medium());

        assert!(store.add_product(draft("x", 1000)).is_err()); // name too short
        assert!(store.add_product(draft("Fine Name", 0)).is_err()); // price not positive

        let mut blank_image = draft("Fine Name", 1000);
        blank_image.image = "  ".to_string();
        assert!(store.add_product(blank_image).is_err());

        let mut blank_category = draft("Fine Name", 1000);
        blank_category.category = String::new();
        assert!(store.add_product(blank_category).is_err());

        assert!(store.extras().is_empty()); // nothing persisted
    }

    #[test]
    fn test_extras_survive_reopen() {
        let medium = medium();

        {
            let mut store = AdminStore::open(medium.clone());
            store.add_product(draft("Goblin Market", 42000)).unwrap();
        }

        let reopened = AdminStore::open(medium);
        assert_eq!(reopened.extras().len(), 1);
        assert_eq!(reopened.extras()[0].name, "Goblin Market");
    }

    #[test]
    fn test_corrupt_extras_treated_as_empty_on_open() {
        let medium = medium();
        medium.set(EXTRA_PRODUCTS_KEY, "{ broken").unwrap();

        let store = AdminStore::open(medium);
        assert!(store.extras().is_empty());
    }

    #[test]
    fn test_own_write_does_not_trip_refresh() {
        let mut store = AdminStore::open(medium());
        store.add_product(draft("Goblin Market", 42000)).unwrap();

        assert!(!store.refresh());
        assert_eq!(store.extras().len(), 1);
    }

    #[test]
    fn test_refresh_observes_external_write_and_removal() {
        let medium = medium();
        let mut store = AdminStore::open(medium.clone());
        assert!(!store.refresh());

        // Another process appends a product.
        let external = Product::basic("N-ext", "Outside Addition", 9000, "card", 3);
        medium
            .set(
                EXTRA_PRODUCTS_KEY,
                &serde_json::to_string(&vec![external]).unwrap(),
            )
            .unwrap();

        assert!(store.refresh());
        assert_eq!(store.extras().len(), 1);
        assert_eq!(store.extras()[0].name, "Outside Addition");
        assert!(!store.refresh()); // change reported once

        // Another process removes the key entirely.
        medium.remove(EXTRA_PRODUCTS_KEY).unwrap();
        assert!(store.refresh());
        assert!(store.extras().is_empty());
    }

    #[test]
    fn test_refresh_keeps_current_copy_on_corrupt_external_write() {
        let medium = medium();
        let mut store = AdminStore::open(medium.clone());
        store.add_product(draft("Goblin Market", 42000)).unwrap();

        medium.set(EXTRA_PRODUCTS_KEY, "%%% corrupt").unwrap();

        assert!(!store.refresh());
        assert_eq!(store.extras().len(), 1);
    }

    #[test]
    fn test_all_products_merges_catalog_then_extras() {
        let mut store = AdminStore::open(medium());
        let catalog = Catalog::new(vec![
            Product::basic("1", "Harbor Masters", 12000, "strategy", 10),
            Product::basic("2", "Night Express", 8000, "mystery", 5),
        ]);

        store.add_product(draft("Goblin Market", 42000)).unwrap();

        let merged = store.all_products(&catalog);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].id, "1");
        assert_eq!(merged[1].id, "2");
        assert_eq!(merged[2].name, "Goblin Market");
    }

    #[test]
    fn test_search_by_name_ignores_description() {
        let mut with_desc = Product::basic("1", "Harbor Masters", 12000, "strategy", 10);
        with_desc.description = "goblin".to_string();
        let other = Product::basic("2", "Goblin Market", 8000, "party", 5);

        let products = vec![&with_desc, &other];

        let hits = search_by_name(&products, "GOBLIN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        assert_eq!(search_by_name(&products, "").len(), 2);
    }

    #[test]
    fn test_recent_orders_takes_first_n() {
        let orders: Vec<Order> = (0..7)
            .map(|i| order(&format!("o{}", i), 1000, OrderStatus::Delivered))
            .collect();

        let recent = recent_orders(&orders, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, "o0");

        assert_eq!(recent_orders(&orders[..2], 5).len(), 2);
    }

    #[test]
    fn test_dashboard_stats() {
        let mut store = AdminStore::open(medium());
        let catalog = Catalog::new(vec![
            Product::basic("1", "Harbor Masters", 12000, "strategy", 10),
            Product::basic("2", "Night Express", 8000, "mystery", 2),
        ]);

        let mut low_stock_draft = draft("Goblin Market", 42000);
        low_stock_draft.stock = Some(1);
        store.add_product(low_stock_draft).unwrap();

        let orders = vec![
            order("o1", 62000, OrderStatus::Processing),
            order("o2", 30000, OrderStatus::Delivered),
            order("o3", 15000, OrderStatus::Cancelled),
        ];
        let users = vec![User {
            id: "u1".to_string(),
            username: "sam".to_string(),
            email: "sam@example.com".to_string(),
            registration_date: "2024-01-15".to_string(),
            is_active: true,
        }];

        let stats = store.dashboard_stats(&catalog, &orders, &users);

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_users, 1);
        // Revenue counts every order regardless of status.
        assert_eq!(stats.total_revenue, Money::from_units(107000));
        assert_eq!(stats.low_stock_products, 2); // "2" and the extra
        assert_eq!(stats.pending_orders, 1);
    }
}
