//! # Catalog
//!
//! Read-side queries over the product list.
//!
//! ## Query Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Queries                                  │
//! │                                                                         │
//! │   Vec<Product>  (catalog order = insertion order)                       │
//! │        │                                                                │
//! │        ├── find(id)            first match by id                        │
//! │        ├── search(q)           name OR description contains, any case   │
//! │        ├── by_category(slug)   exact slug equality                      │
//! │        ├── featured()          hero flag                                │
//! │        ├── new_arrivals()      new flag                                 │
//! │        ├── popular()           bestseller flag                          │
//! │        ├── related_to(p, n)    same category, excluding p, first n      │
//! │        │                                                                │
//! │        └── query(&ProductQuery)                                         │
//! │              search filter ─► category filter ─► sort                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Linear Scan?
//! The catalog is a few dozen mock products plus whatever the admin added.
//! Filters walk the list and keep catalog order; only [`Catalog::query`]
//! sorts, and its flag sorts are stable so ties keep catalog order too.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Sort Key
// =============================================================================

/// Sort order for the explore listing.
///
/// Serializes to the sort-dropdown values the views use
/// (`"newest"`, `"price-low"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// New arrivals first, catalog order within each group.
    Newest,
    /// Bestsellers first, catalog order within each group.
    Popular,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Lexicographic by name.
    Name,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Newest
    }
}

// =============================================================================
// Product Query
// =============================================================================

/// A combined listing request: optional search term, optional category
/// filter, and a sort order. `Default` is the explore page's initial
/// state (no filters, newest first).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ProductQuery {
    /// Free-text term matched against name and description.
    pub search: Option<String>,
    /// Category slug; exact match.
    pub category: Option<String>,
    pub sort: SortKey,
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered product list with the storefront's read queries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog over the given products. Order is meaningful and
    /// preserved by every filter.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// All products in catalog order.
    #[inline]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds a product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive containment search over name and description.
    ///
    /// The term is trimmed first; an empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| matches_term(p, &needle))
            .collect()
    }

    /// Products in the given category (exact slug match).
    pub fn by_category(&self, slug: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category == slug).collect()
    }

    /// Products flagged for the home-page hero section.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured()).collect()
    }

    /// Products flagged as new arrivals.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.new_arrival()).collect()
    }

    /// Products flagged as bestsellers.
    pub fn popular(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.popular()).collect()
    }

    /// Products shown under "you may also like" on a product page:
    /// same category, excluding the product itself, first `limit` matches.
    pub fn related_to(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// The explore-page listing: search filter, then category filter,
    /// then sort.
    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> {
        let needle = query
            .search
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| matches_term(p, &needle))
            .filter(|p| match query.category.as_deref() {
                Some(slug) => p.category == slug,
                None => true,
            })
            .collect();

        match query.sort {
            // sort_by_key is stable: ties keep catalog order.
            SortKey::Newest => results.sort_by_key(|p| !p.new_arrival()),
            SortKey::Popular => results.sort_by_key(|p| !p.popular()),
            SortKey::PriceLow => results.sort_by_key(|p| p.price),
            SortKey::PriceHigh => results.sort_by_key(|p| std::cmp::Reverse(p.price)),
            SortKey::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        results
    }
}

fn matches_term(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut a = Product::basic("1", "Harbor Masters", 12000, "strategy", 10);
        a.description = "Trade routes and dockside auctions".to_string();
        a.is_popular = Some(true);

        let mut b = Product::basic("2", "Night Express", 8000, "mystery", 5);
        b.description = "A murder on the midnight train".to_string();
        b.is_new = Some(true);

        let mut c = Product::basic("3", "Orchard Run", 15000, "family", 7);
        c.description = "Race to harvest the orchard".to_string();
        c.is_featured = Some(true);

        let mut d = Product::basic("4", "Cinder Court", 8000, "strategy", 2);
        d.description = "Court intrigue with hidden loyalties".to_string();
        d.is_new = Some(true);

        Catalog::new(vec![a, b, c, d])
    }

    #[test]
    fn test_find() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find("3").map(|p| p.name.as_str()), Some("Orchard Run"));
        assert!(catalog.find("99").is_none());
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = sample_catalog();

        let by_name = catalog.search("harbor");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "1");

        let by_description = catalog.search("MIDNIGHT");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "2");

        // Trimmed, and an empty term matches everything.
        assert_eq!(catalog.search("  orchard  ").len(), 1);
        assert_eq!(catalog.search("").len(), 4);
        assert_eq!(catalog.search("   ").len(), 4);
    }

    #[test]
    fn test_by_category_is_exact() {
        let catalog = sample_catalog();

        let strategy = catalog.by_category("strategy");
        assert_eq!(strategy.len(), 2);
        assert_eq!(strategy[0].id, "1");
        assert_eq!(strategy[1].id, "4");

        assert!(catalog.by_category("strat").is_empty());
    }

    #[test]
    fn test_flag_filters() {
        let catalog = sample_catalog();
        assert_eq!(catalog.featured().len(), 1);
        assert_eq!(catalog.new_arrivals().len(), 2);
        assert_eq!(catalog.popular().len(), 1);
    }

    #[test]
    fn test_related_excludes_self_and_respects_limit() {
        let catalog = sample_catalog();
        let subject = catalog.find("1").unwrap().clone();

        let related = catalog.related_to(&subject, 3);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "4");

        assert!(catalog.related_to(&subject, 0).is_empty());
    }

    #[test]
    fn test_query_newest_is_stable_flag_first() {
        let catalog = sample_catalog();
        let results = catalog.query(&ProductQuery::default());

        // New arrivals (2, 4) first in catalog order, then the rest (1, 3).
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_query_price_sorts() {
        let catalog = sample_catalog();

        let low = catalog.query(&ProductQuery {
            sort: SortKey::PriceLow,
            ..Default::default()
        });
        let ids: Vec<&str> = low.iter().map(|p| p.id.as_str()).collect();
        // 2 and 4 tie at 8000; stable sort keeps catalog order between them.
        assert_eq!(ids, vec!["2", "4", "1", "3"]);

        let high = catalog.query(&ProductQuery {
            sort: SortKey::PriceHigh,
            ..Default::default()
        });
        let ids: Vec<&str> = high.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_query_name_sort() {
        let catalog = sample_catalog();
        let results = catalog.query(&ProductQuery {
            sort: SortKey::Name,
            ..Default::default()
        });
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Cinder Court", "Harbor Masters", "Night Express", "Orchard Run"]
        );
    }

    #[test]
    fn test_query_combines_search_category_and_sort() {
        let catalog = sample_catalog();
        let results = catalog.query(&ProductQuery {
            search: Some("court".to_string()),
            category: Some("strategy".to_string()),
            sort: SortKey::PriceLow,
        });

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "4");

        // Category filter alone.
        let strategy = catalog.query(&ProductQuery {
            category: Some("strategy".to_string()),
            ..Default::default()
        });
        assert_eq!(strategy.len(), 2);
    }

    #[test]
    fn test_sort_key_wire_format() {
        assert_eq!(serde_json::to_string(&SortKey::PriceLow).unwrap(), "\"price-low\"");
        assert_eq!(serde_json::to_string(&SortKey::Newest).unwrap(), "\"newest\"");

        let key: SortKey = serde_json::from_str("\"price-high\"").unwrap();
        assert_eq!(key, SortKey::PriceHigh);
    }
}
