//! # Blog
//!
//! Read-side queries over the storefront's article content: reviews, news
//! and behind-the-scenes posts shown under `/blog`.
//!
//! ## Query Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Blog Queries                                   │
//! │                                                                         │
//! │   Vec<BlogPost> + Vec<BlogCategory>                                     │
//! │        │                                                                │
//! │        ├── find_by_slug(slug)    the post page lookup                   │
//! │        ├── category(slug)        category header lookup                 │
//! │        ├── featured(n)           flagged posts, post order, first n     │
//! │        ├── by_category(slug)     membership filter, newest first        │
//! │        ├── related_to(p, n)      shares any category, excluding p       │
//! │        │                                                                │
//! │        └── query(&BlogQuery)                                            │
//! │              newest first ─► category filter ─► title/excerpt search    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Posts carry ISO dates as strings, like [`Order::date`](crate::Order);
//! newest-first ordering is a plain descending string sort.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Blog Category
// =============================================================================

/// A blog content category. The slug is the stable identifier posts refer
/// to; the name is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BlogCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// =============================================================================
// Blog Post
// =============================================================================

/// A blog article.
///
/// Unlike products, a post can belong to several categories at once, so
/// the category filter is a membership test, not an equality test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,

    /// URL path segment; the stable lookup key for the post page.
    pub slug: String,

    pub title: String,

    /// Listing teaser, searched together with the title.
    pub excerpt: String,

    /// Article body as HTML.
    pub content: String,

    /// Cover image path.
    pub image: String,

    /// Listing thumbnail; the cover stands in when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// ISO date label ("2025-03-01"); compares as a newest-first sort key.
    pub date: String,

    /// Slugs of every category this post belongs to.
    pub categories: Vec<String>,

    /// Home-page carousel flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl BlogPost {
    /// The image for listing rows: the thumbnail, or the cover when the
    /// post has none.
    pub fn thumbnail_or_cover(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.image)
    }

    /// Carousel flag, absent meaning false.
    #[inline]
    pub fn featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    /// Checks membership in a category.
    #[inline]
    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c == slug)
    }
}

// =============================================================================
// Blog Query
// =============================================================================

/// The blog home page's listing request: optional search term, optional
/// category filter. Results are always newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct BlogQuery {
    /// Free-text term matched against title and excerpt.
    pub search: Option<String>,
    /// Category slug; membership test.
    pub category: Option<String>,
}

// =============================================================================
// Blog
// =============================================================================

/// The blog content with its read queries.
#[derive(Debug, Clone, Default)]
pub struct Blog {
    posts: Vec<BlogPost>,
    categories: Vec<BlogCategory>,
}

impl Blog {
    /// Creates a blog over the given posts and categories. Post order is
    /// meaningful: [`featured`](Blog::featured) and
    /// [`related_to`](Blog::related_to) keep it.
    pub fn new(posts: Vec<BlogPost>, categories: Vec<BlogCategory>) -> Self {
        Blog { posts, categories }
    }

    /// All posts in content order.
    #[inline]
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// The category list.
    #[inline]
    pub fn categories(&self) -> &[BlogCategory] {
        &self.categories
    }

    /// Finds a post by its URL slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Finds a category by slug, for the category page header.
    pub fn category(&self, slug: &str) -> Option<&BlogCategory> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Posts flagged for the home-page carousel, in content order, first
    /// `limit` matches.
    pub fn featured(&self, limit: usize) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.featured()).take(limit).collect()
    }

    /// Posts in the given category, newest first.
    pub fn by_category(&self, slug: &str) -> Vec<&BlogPost> {
        newest_first(self.posts.iter().filter(|p| p.in_category(slug)).collect())
    }

    /// Posts shown under "read next" on a post page: share at least one
    /// category with `post`, excluding the post itself, in content order,
    /// first `limit` matches.
    pub fn related_to(&self, post: &BlogPost, limit: usize) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.id != post.id && p.categories.iter().any(|c| post.in_category(c)))
            .take(limit)
            .collect()
    }

    /// The blog home listing: newest first, then the category filter,
    /// then the title/excerpt search.
    pub fn query(&self, query: &BlogQuery) -> Vec<&BlogPost> {
        let needle = query
            .search
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        let results = self
            .posts
            .iter()
            .filter(|p| match query.category.as_deref() {
                Some(slug) => p.in_category(slug),
                None => true,
            })
            .filter(|p| matches_term(p, &needle))
            .collect();

        newest_first(results)
    }
}

fn newest_first(mut posts: Vec<&BlogPost>) -> Vec<&BlogPost> {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

fn matches_term(post: &BlogPost, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
}

// =============================================================================
// Unit Tests
// =============================================================================
