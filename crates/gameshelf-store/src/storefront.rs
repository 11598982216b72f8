//! # Storefront Composition Root
//!
//! Wires the catalog, cart, comment and admin stores over one shared
//! storage medium. This is the single place where the object graph is
//! assembled; everything below it takes its collaborators as arguments.
//!
//! ## Why explicit wiring?
//! There are no global singletons. A process that wants two independent
//! storefronts (tests do this constantly) builds two `Storefront` values
//! over two media and they cannot observe each other.
//!
//! ## Ownership
//! ```text
//! Storefront
//!   ├── medium: Arc<dyn StorageMedium>   (shared with every store)
//!   ├── config: StoreConfig              (labels, shipping)
//!   ├── catalog: Catalog                 (static products, read-only)
//!   ├── blog: Blog                       (static articles, read-only)
//!   ├── cart: CartStore                  (rehydrated once at open)
//!   ├── comments: CommentStore           (reads through on every call)
//!   └── admin: AdminStore                (extras cache + key watcher)
//! ```

use std::sync::Arc;

use gameshelf_core::{Blog, Catalog, Product};
use tracing::debug;

use crate::admin::AdminStore;
use crate::cart_store::CartStore;
use crate::comments::CommentStore;
use crate::config::{CheckoutSummary, StoreConfig};
use crate::medium::StorageMedium;
use crate::mock;

// =============================================================================
// Storefront
// =============================================================================

/// The assembled storefront: one medium, one config, five collaborators.
pub struct Storefront {
    medium: Arc<dyn StorageMedium>,
    config: StoreConfig,
    catalog: Catalog,
    blog: Blog,
    cart: CartStore,
    comments: CommentStore,
    admin: AdminStore,
}

impl Storefront {
    /// Opens a storefront over the given medium, configuration and static
    /// content. The cart and admin extras rehydrate from the medium here;
    /// after this call the in-memory state is authoritative.
    pub fn open(
        medium: Arc<dyn StorageMedium>,
        config: StoreConfig,
        products: Vec<Product>,
        blog: Blog,
    ) -> Self {
        let catalog = Catalog::new(products);
        let cart = CartStore::open(medium.clone());
        let comments = CommentStore::new(medium.clone());
        let admin = AdminStore::open(medium.clone());

        debug!(
            store = %config.store_name,
            products = catalog.len(),
            posts = blog.posts().len(),
            "storefront ready"
        );

        Storefront {
            medium,
            config,
            catalog,
            blog,
            cart,
            comments,
            admin,
        }
    }

    /// Development constructor: the mock catalog and blog plus
    /// configuration from the environment.
    pub fn with_mock_data(medium: Arc<dyn StorageMedium>) -> Self {
        Storefront::open(
            medium,
            StoreConfig::from_env(),
            mock::mock_products(),
            Blog::new(mock::mock_blog_posts(), mock::mock_blog_categories()),
        )
    }

    /// The shared medium handle, for callers that need their own watcher.
    pub fn medium(&self) -> Arc<dyn StorageMedium> {
        self.medium.clone()
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The static product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The static blog content.
    pub fn blog(&self) -> &Blog {
        &self.blog
    }

    /// The persistent cart, read side.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The persistent cart, mutation side.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Per-product comments.
    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    /// Admin catalog extension, read side.
    pub fn admin(&self) -> &AdminStore {
        &self.admin
    }

    /// Admin catalog extension, mutation side.
    pub fn admin_mut(&mut self) -> &mut AdminStore {
        &mut self.admin
    }

    /// Checkout totals for the current cart under the store configuration.
    pub fn checkout_summary(&self) -> CheckoutSummary {
        self.config.checkout_summary(self.cart.cart())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::ProductDraft;
    use crate::medium::MemoryMedium;
    use gameshelf_core::Money;

    fn open_default(medium: Arc<MemoryMedium>) -> Storefront {
        Storefront::open(
            medium,
            StoreConfig::default(),
            mock::mock_products(),
            Blog::new(mock::mock_blog_posts(), mock::mock_blog_categories()),
        )
    }

    #[test]
    fn test_with_mock_data_wires_the_full_catalog() {
        let shop = Storefront::with_mock_data(Arc::new(MemoryMedium::new()));

        assert_eq!(shop.catalog().len(), 12);
        assert_eq!(shop.blog().posts().len(), 4);
        assert!(shop.cart().is_empty());
        assert!(shop.admin().extras().is_empty());
    }

    #[test]
    fn test_blog_queries_through_the_composition_root() {
        let shop = open_default(Arc::new(MemoryMedium::new()));

        let featured = shop.blog().featured(3);
        assert!(!featured.is_empty());

        let post = shop
            .blog()
            .find_by_slug("granary-beginners-guide")
            .expect("mock post present");
        assert!(post.in_category("reviews"));
    }

    #[test]
    fn test_cart_flow_through_the_composition_root() {
        let mut shop = open_default(Arc::new(MemoryMedium::new()));

        let harbor = shop.catalog().all()[0].clone();
        let tidepool = shop.catalog().all()[11].clone();

        shop.cart_mut().add_to_cart(&harbor, Some(2));
        shop.cart_mut().add_to_cart(&tidepool, None);

        assert_eq!(shop.cart().total(), Money::from_units(2 * 850_000 + 190_000));
        assert_eq!(shop.cart().item_count(), 3);

        shop.cart_mut().remove_from_cart(&tidepool.id);
        assert_eq!(shop.cart().item_count(), 2);
    }

    #[test]
    fn test_cart_survives_reopening_the_storefront() {
        let medium = Arc::new(MemoryMedium::new());

        {
            let mut shop = open_default(medium.clone());
            let game = shop.catalog().all()[2].clone();
            shop.cart_mut().add_to_cart(&game, Some(3));
        }

        let reopened = open_default(medium);
        assert_eq!(reopened.cart().item_count(), 3);
        assert_eq!(reopened.cart().total(), Money::from_units(3 * 640_000));
    }

    #[test]
    fn test_checkout_summary_uses_store_config() {
        let mut shop = open_default(Arc::new(MemoryMedium::new()));

        let empty = shop.checkout_summary();
        assert_eq!(empty.grand_total, Money::zero());

        let game = shop.catalog().all()[11].clone();
        shop.cart_mut().add_to_cart(&game, Some(1));

        let summary = shop.checkout_summary();
        assert_eq!(summary.subtotal, Money::from_units(190_000));
        assert_eq!(summary.shipping, Money::from_units(50_000));
        assert_eq!(summary.grand_total, Money::from_units(240_000));
    }

    #[test]
    fn test_admin_extension_shows_up_in_the_listing() {
        let mut shop = open_default(Arc::new(MemoryMedium::new()));

        let draft = ProductDraft {
            name: "Copper Canopy".to_string(),
            price: Money::from_units(410_000),
            ..ProductDraft::default()
        };
        let added = shop
            .admin_mut()
            .add_product(draft)
            .expect("draft should validate");

        let listing = shop.admin().all_products(shop.catalog());
        assert_eq!(listing.len(), 13);
        assert_eq!(listing[12].id, added.id);
    }

    #[test]
    fn test_comments_flow_through_the_composition_root() {
        let shop = open_default(Arc::new(MemoryMedium::new()));

        let posted = shop.comments().add("1", "Dana", "Shines at four players.");
        assert!(posted.is_ok());

        let thread = shop.comments().list("1");
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].text, "Shines at four players.");
    }

    #[test]
    fn test_independent_storefronts_do_not_share_state() {
        let mut first = open_default(Arc::new(MemoryMedium::new()));
        let second = open_default(Arc::new(MemoryMedium::new()));

        let game = first.catalog().all()[0].clone();
        first.cart_mut().add_to_cart(&game, None);

        assert_eq!(first.cart().item_count(), 1);
        assert!(second.cart().is_empty());
    }
}
