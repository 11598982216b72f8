//! # Comment Store
//!
//! Per-product user comments, one medium key per product.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Comments per Product                               │
//! │                                                                         │
//! │  list("42")                                                             │
//! │    get("comments:42") ──► JSON array ──► sort newest first             │
//! │         └── absent or corrupt ──► empty list (silent)                  │
//! │                                                                         │
//! │  add("42", author, text)                                                │
//! │    validate ──► Comment { uuid, trimmed fields, now() }                │
//! │    prepend to stored array ──► set("comments:42", json)                │
//! │         └── write failure: warn! and keep going                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;
use uuid::Uuid;

use gameshelf_core::validation::{validate_comment_author, validate_comment_text};
use gameshelf_core::ValidationResult;

use crate::comments_key;
use crate::error::StoreError;
use crate::medium::StorageMedium;

// =============================================================================
// Comment
// =============================================================================

/// A user comment on a product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name the commenter typed, trimmed.
    pub author: String,

    /// Comment body, trimmed.
    pub text: String,

    /// When the comment was posted.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Comment Store
// =============================================================================

/// Comments keyed per product on the shared medium.
pub struct CommentStore {
    medium: Arc<dyn StorageMedium>,
}

impl CommentStore {
    /// Creates a comment store over the medium.
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        CommentStore { medium }
    }

    /// All comments for a product, newest first.
    ///
    /// Missing or corrupt stored data silently reads as "no comments yet".
    pub fn list(&self, product_id: &str) -> Vec<Comment> {
        let mut comments = self.load(product_id);
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }

    /// Posts a comment.
    ///
    /// ## Behavior
    /// - Rejects a blank author or blank/oversized text with a validation
    ///   error (the form shows it)
    /// - Stores trimmed fields, a fresh UUID id and the current UTC time
    /// - Prepends to the stored array and persists fire-and-forget
    pub fn add(&self, product_id: &str, author: &str, text: &str) -> ValidationResult<Comment> {
        validate_comment_author(author)?;
        validate_comment_text(text)?;

        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            author: author.trim().to_string(),
            text: text.trim().to_string(),
            created_at: Utc::now(),
        };

        debug!(product_id = %product_id, comment_id = %comment.id, "comment added");

        let mut comments = self.load(product_id);
        comments.insert(0, comment.clone());
        self.persist(product_id, &comments);

        Ok(comment)
    }

    /// Reads the stored array in stored order; absent or corrupt → empty.
    fn load(&self, product_id: &str) -> Vec<Comment> {
        let raw = match self.medium.get(&comments_key(product_id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                debug!(product_id = %product_id, error = %err, "comments unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(comments) => comments,
            Err(err) => {
                debug!(product_id = %product_id, error = %err, "comments unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, product_id: &str, comments: &[Comment]) {
        let result = serde_json::to_string(comments)
            .map_err(StoreError::from)
            .and_then(|raw| self.medium.set(&comments_key(product_id), &raw));

        if let Err(err) = result {
            warn!(product_id = %product_id, error = %err, "comment write failed");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
