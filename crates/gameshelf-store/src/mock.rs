//! # Mock Catalog Data
//!
//! Fixed sample data the storefront runs on in development: the static
//! product catalog, the category list, the blog content, and the orders
//! and users the admin dashboard reads.
//!
//! ## Why fixed vectors?
//! There is no server or database behind the storefront. Views read from
//! these vectors plus whatever the admin store appends at runtime; the only
//! state that survives a restart is what goes through the storage medium.
//!
//! ## Shape
//! - Products `"1"`..`"12"` spread across the five fixed categories
//! - Category slugs are stable identifiers; display names are free text
//! - Orders snapshot their line items, so a later price change never
//!   rewrites order history

use gameshelf_core::{
    BlogCategory, BlogPost, CartItem, Category, Money, Order, OrderStatus, Product, User,
};

/// Flat shipping added to every sample order total. Matches
/// [`StoreConfig::default`](crate::StoreConfig).
const SAMPLE_SHIPPING_UNITS: i64 = 50_000;

// =============================================================================
// Products
// =============================================================================

/// The static product catalog.
pub fn mock_products() -> Vec<Product> {
    vec![
        Product {
            description: "Bid for the busiest docks and route cargo through a \
                          crowded harbor before the evening tide turns."
                .to_string(),
            players: Some("2-4 players".to_string()),
            playtime: Some("60-90 min".to_string()),
            age_rating: Some("12+".to_string()),
            is_featured: Some(true),
            is_popular: Some(true),
            ..Product::basic("1", "Harbor Masters", 850_000, "strategy", 14)
        },
        Product {
            description: "Rebuild a kingdom from volcanic ash, drafting \
                          engines that smolder long after the round ends."
                .to_string(),
            images: Some(vec![
                "/images/2.jpg".to_string(),
                "/images/2-board.jpg".to_string(),
                "/images/2-cards.jpg".to_string(),
            ]),
            players: Some("1-4 players".to_string()),
            playtime: Some("90-120 min".to_string()),
            age_rating: Some("14+".to_string()),
            is_new: Some(true),
            ..Product::basic("2", "Cinder Realms", 920_000, "strategy", 8)
        },
        Product {
            description: "A tight worker-placement harvest where every silo \
                          you fill feeds the village through winter."
                .to_string(),
            players: Some("2-4 players".to_string()),
            playtime: Some("45-60 min".to_string()),
            age_rating: Some("10+".to_string()),
            is_popular: Some(true),
            ..Product::basic("3", "Granary", 640_000, "strategy", 21)
        },
        Product {
            description: "Lay track across three time zones and race rival \
                          barons to the meridian line."
                .to_string(),
            players: Some("2-5 players".to_string()),
            playtime: Some("90 min".to_string()),
            age_rating: Some("12+".to_string()),
            ..Product::basic("4", "Meridian Rails", 780_000, "strategy", 3)
        },
        Product {
            description: "A cooperative deduction case set on one fog-bound \
                          street where every neighbor hides something."
                .to_string(),
            players: Some("1-5 players".to_string()),
            playtime: Some("60 min".to_string()),
            age_rating: Some("14+".to_string()),
            is_featured: Some(true),
            is_new: Some(true),
            ..Product::basic("5", "The Hollow Street", 560_000, "mystery", 9)
        },
        Product {
            description: "Search the manor room by room before the last lamp \
                          burns out and the culprit slips away."
                .to_string(),
            players: Some("2-6 players".to_string()),
            playtime: Some("45 min".to_string()),
            age_rating: Some("12+".to_string()),
            is_popular: Some(true),
            ..Product::basic("6", "Last Light at Blackwood Manor", 480_000, "mystery", 0)
        },
        Product {
            description: "Bluff your way through outrageous trivia; the best \
                          lie in the room scores as well as the truth."
                .to_string(),
            players: Some("4-10 players".to_string()),
            playtime: Some("20 min".to_string()),
            age_rating: Some("8+".to_string()),
            is_popular: Some(true),
            ..Product::basic("7", "Fib!", 310_000, "party", 30)
        },
        Product {
            description: "Sketch, guess and toast your way through teams in \
                          this loud crowd-pleaser for game night."
                .to_string(),
            players: Some("3-8 players".to_string()),
            playtime: Some("30 min".to_string()),
            age_rating: Some("10+".to_string()),
            is_new: Some(true),
            ..Product::basic("8", "Chalk & Cheers", 280_000, "party", 2)
        },
        Product {
            description: "Gather fruit along a winding trail in a gentle \
                          set-collection game the whole table can follow."
                .to_string(),
            players: Some("2-4 players".to_string()),
            playtime: Some("30 min".to_string()),
            age_rating: Some("6+".to_string()),
            is_featured: Some(true),
            ..Product::basic("9", "Orchard Trail", 350_000, "family", 17)
        },
        Product {
            description: "Splash between puddles collecting soggy treasure \
                          in a quick push-your-luck romp for young crews."
                .to_string(),
            players: Some("2-4 players".to_string()),
            playtime: Some("20 min".to_string()),
            age_rating: Some("5+".to_string()),
            ..Product::basic("10", "Puddle Pirates", 260_000, "family", 11)
        },
        Product {
            description: "A trick-taking garden where foxglove cards poison \
                          the tricks your rivals thought were safe."
                .to_string(),
            players: Some("2-4 players".to_string()),
            playtime: Some("25 min".to_string()),
            age_rating: Some("8+".to_string()),
            is_new: Some(true),
            is_popular: Some(true),
            ..Product::basic("11", "Foxglove", 240_000, "card", 26)
        },
        Product {
            description: "A two-player duel over shifting tidepools where \
                          every card you play feeds your opponent's reef."
                .to_string(),
            players: Some("1-2 players".to_string()),
            playtime: Some("15 min".to_string()),
            age_rating: Some("8+".to_string()),
            ..Product::basic("12", "Tidepool", 190_000, "card", 13)
        },
    ]
}

// =============================================================================
// Categories
// =============================================================================

/// The five fixed storefront categories.
pub fn mock_categories() -> Vec<Category> {
    vec![
        category("1", "Strategy", "strategy"),
        category("2", "Mystery", "mystery"),
        category("3", "Party", "party"),
        category("4", "Family", "family"),
        category("5", "Card Games", "card"),
    ]
}

fn category(id: &str, name: &str, slug: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

// =============================================================================
// Blog
// =============================================================================

const BLOG_PLACEHOLDER: &str = "/images/blog/post-placeholder.svg";

/// The blog's four fixed content categories.
pub fn mock_blog_categories() -> Vec<BlogCategory> {
    vec![
        blog_category("1", "Board Game News", "news"),
        blog_category("2", "Reviews", "reviews"),
        blog_category("3", "Mystery Files", "mystery"),
        blog_category("4", "Behind the Scenes", "behind-the-scenes"),
    ]
}

fn blog_category(id: &str, name: &str, slug: &str) -> BlogCategory {
    BlogCategory {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

/// The static blog posts, in content order. Dates are ISO strings, so the
/// blog's newest-first sort is a plain string comparison.
pub fn mock_blog_posts() -> Vec<BlogPost> {
    vec![
        blog_post(
            "p1",
            "harbor-masters-review",
            "Harbor Masters Review: Bidding Wars on the Waterfront",
            "A deep look at the auction mechanics, the tide track, and why \
             the dockside scramble keeps tables coming back.",
            "<h2>Overview</h2>\
             <p>Harbor Masters is an auction game about routing cargo through \
             a crowded port before the evening tide turns.</p>\
             <h3>Why it works</h3>\
             <p>Simple rules, sharp decisions, and a timer everyone can see \
             coming.</p>\
             <h3>Verdict</h3>\
             <p>If you like tense bidding with a short runway, this one \
             belongs on your shelf.</p>",
            Some("The GameShelf Team"),
            "2024-12-10",
            &["reviews"],
            true,
        ),
        blog_post(
            "p2",
            "the-missing-meeple-case",
            "The Missing Meeple: Can You Crack the Case?",
            "A fictional caper with three suspects and a trail of clues. See \
             if you can name the culprit before anyone else at the table.",
            "<p>This staged case lays out the evidence so you can put your \
             deduction skills to work.</p>\
             <ul><li>Time of theft: midnight</li><li>Suspects: three</li>\
             <li>Clues: fingerprints, a security tape</li></ul>\
             <p>The verdict is yours to reach.</p>",
            Some("The GameShelf Editors"),
            "2025-01-05",
            &["mystery"],
            true,
        ),
        blog_post(
            "p3",
            "granary-beginners-guide",
            "A Beginner's Guide to Granary",
            "New to worker placement? This step-by-step guide will have you \
             filling silos and feeding the village by your second game.",
            "<p>From resource rows to building actions, this guide covers the \
             fundamentals and a few opening tips that win games.</p>",
            Some("Strategy Desk"),
            "2025-02-15",
            &["reviews"],
            false,
        ),
        blog_post(
            "p4",
            "designing-our-mystery-nights",
            "Behind the Scenes: Designing Our Mystery Nights",
            "From first idea to final clue card, here is how our in-store \
             mystery cases come together and what keeps them surprising.",
            "<p>In this post we talk about the creative process, playtesting \
             with regulars, and writing clues that mislead fairly.</p>",
            Some("Content Crew"),
            "2025-03-01",
            &["behind-the-scenes", "mystery"],
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn blog_post(
    id: &str,
    slug: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    author: Option<&str>,
    date: &str,
    categories: &[&str],
    is_featured: bool,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        image: BLOG_PLACEHOLDER.to_string(),
        thumbnail: Some(BLOG_PLACEHOLDER.to_string()),
        author: author.map(str::to_string),
        date: date.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        is_featured: if is_featured { Some(true) } else { None },
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Sample order history for the admin dashboard, newest first.
///
/// Line items snapshot entries from [`mock_products`] by position; totals
/// are derived from the snapshots so the two can never drift apart.
pub fn mock_orders() -> Vec<Order> {
    let games = mock_products();

    vec![
        order(
            "ORD-1006",
            "4",
            "Theo Brandt",
            vec![line(&games[4], 1)],
            OrderStatus::Processing,
            "2025-08-19",
        ),
        order(
            "ORD-1005",
            "1",
            "Dana Whitfield",
            vec![line(&games[0], 1), line(&games[10], 2)],
            OrderStatus::Processing,
            "2025-08-14",
        ),
        order(
            "ORD-1004",
            "2",
            "Miles Okafor",
            vec![line(&games[8], 1), line(&games[11], 1)],
            OrderStatus::Shipped,
            "2025-08-11",
        ),
        order(
            "ORD-1003",
            "3",
            "Priya Raman",
            vec![line(&games[1], 1)],
            OrderStatus::Delivered,
            "2025-08-02",
        ),
        order(
            "ORD-1002",
            "1",
            "Dana Whitfield",
            vec![line(&games[6], 3), line(&games[7], 1)],
            OrderStatus::Delivered,
            "2025-07-28",
        ),
        order(
            "ORD-1001",
            "5",
            "Sofia Marchetti",
            vec![line(&games[2], 1)],
            OrderStatus::Cancelled,
            "2025-07-15",
        ),
    ]
}

fn line(product: &Product, quantity: i64) -> CartItem {
    CartItem {
        product: product.clone(),
        quantity,
    }
}

fn order(
    id: &str,
    user_id: &str,
    customer_name: &str,
    items: Vec<CartItem>,
    status: OrderStatus,
    date: &str,
) -> Order {
    let merchandise: Money = items.iter().map(CartItem::line_total).sum();
    let shipping = Money::from_units(SAMPLE_SHIPPING_UNITS);

    Order {
        id: id.to_string(),
        user_id: user_id.to_string(),
        customer_name: customer_name.to_string(),
        items,
        total: merchandise + shipping,
        status,
        date: date.to_string(),
        shipping_cost: shipping,
    }
}

// =============================================================================
// Users
// =============================================================================

/// Sample registered customers for the admin user listing.
pub fn mock_users() -> Vec<User> {
    vec![
        user("1", "dana.w", "dana.whitfield@example.com", "2025-03-08", true),
        user("2", "milesokafor", "miles.okafor@example.com", "2025-04-22", true),
        user("3", "priya.r", "priya.raman@example.com", "2025-01-17", true),
        user("4", "theo_b", "theo.brandt@example.com", "2025-06-30", false),
        user("5", "sofiam", "sofia.marchetti@example.com", "2025-05-05", true),
    ]
}

fn user(id: &str, username: &str, email: &str, registered: &str, is_active: bool) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        registration_date: registered.to_string(),
        is_active,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gameshelf_core::Cart;
    use std::collections::HashSet;

    #[test]
    fn test_every_product_belongs_to_a_known_category() {
        let slugs: HashSet<String> = mock_categories().into_iter().map(|c| c.slug).collect();

        for game in mock_products() {
            assert!(
                slugs.contains(&game.category),
                "{} has unknown category {}",
                game.name,
                game.category
            );
        }
    }

    #[test]
    fn test_every_category_has_at_least_one_product() {
        let games = mock_products();

        for category in mock_categories() {
            assert!(
                games.iter().any(|g| g.category == category.slug),
                "no products in {}",
                category.slug
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let games = mock_products();
        let ids: HashSet<&str> = games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids.len(), games.len());

        let orders = mock_orders();
        let order_ids: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(order_ids.len(), orders.len());

        let users = mock_users();
        let user_ids: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(user_ids.len(), users.len());
    }

    #[test]
    fn test_catalog_has_home_page_material() {
        let games = mock_products();

        assert!(games.iter().any(|g| g.featured()));
        assert!(games.iter().any(|g| g.new_arrival()));
        assert!(games.iter().any(|g| g.popular()));

        // The dashboard's low-stock panel needs something to show.
        assert!(games.iter().any(|g| g.is_low_stock()));
        assert!(games.iter().any(|g| !g.in_stock()));
    }

    #[test]
    fn test_orders_reference_known_users() {
        let user_ids: HashSet<String> = mock_users().into_iter().map(|u| u.id).collect();

        for order in mock_orders() {
            assert!(user_ids.contains(&order.user_id), "{} has unknown user", order.id);
        }
    }

    #[test]
    fn test_order_totals_cover_items_plus_shipping() {
        for order in mock_orders() {
            let merchandise: Money = order.items.iter().map(CartItem::line_total).sum();
            assert_eq!(order.total, merchandise + order.shipping_cost);
            assert_eq!(order.shipping_cost, Money::from_units(SAMPLE_SHIPPING_UNITS));
        }
    }

    #[test]
    fn test_orders_are_newest_first() {
        let orders = mock_orders();

        // ISO dates compare correctly as strings. The dashboard's recent
        // panel takes the leading entries as-is.
        for pair in orders.windows(2) {
            assert!(pair[0].date >= pair[1].date, "{} out of order", pair[1].id);
        }
    }

    #[test]
    fn test_blog_posts_reference_known_categories() {
        let slugs: HashSet<String> = mock_blog_categories().into_iter().map(|c| c.slug).collect();

        for post in mock_blog_posts() {
            assert!(!post.categories.is_empty(), "{} has no categories", post.slug);
            for category in &post.categories {
                assert!(slugs.contains(category), "{} in unknown category {}", post.slug, category);
            }
        }
    }

    #[test]
    fn test_blog_slugs_are_unique_and_home_page_has_material() {
        let posts = mock_blog_posts();

        let slugs: HashSet<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), posts.len());

        // The home carousel needs featured posts; the dates must sort as
        // ISO strings for the newest-first listing.
        assert!(posts.iter().any(|p| p.featured()));
        for post in &posts {
            assert_eq!(post.date.len(), 10, "{} date is not ISO", post.slug);
        }
    }

    #[test]
    fn test_sample_cart_scenario_over_mock_data() {
        let games = mock_products();
        let mut cart = Cart::new();

        cart.add(&games[0], 1);
        cart.add(&games[11], 2);

        assert_eq!(cart.total(), Money::from_units(850_000 + 2 * 190_000));
        assert_eq!(cart.item_count(), 3);
    }
}
