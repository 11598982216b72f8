//! # Validation Module
//!
//! Input validation for the two write-side forms: the admin "new product"
//! form and the product comment form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                         │
//! │  ├── Disables the submit button while fields are invalid               │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                            │
//! │  ├── Same rules, enforced before anything is persisted                 │
//! │  └── The medium itself stores whatever it is given; there is no        │
//! │      schema layer below this one                                        │
//! │                                                                         │
//! │  Cart operations are NOT validated here: a bad quantity is not an      │
//! │  error, it is a removal (see the cart module).                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gameshelf_core::validation::validate_product_name;
//!
//! assert!(validate_product_name("Harbor Masters").is_ok());
//! assert!(validate_product_name("x").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Product Draft Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at least 2 characters
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use gameshelf_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Harbor Masters").is_ok());
/// assert!(validate_product_name("  x  ").is_err());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    // Bounds are in characters, not bytes: most catalog content is
    // non-ASCII and str::len would triple-count it.
    let length = name.chars().count();

    if length < 2 {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        });
    }

    if length > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive; there are no free board games
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a product image path.
///
/// ## Rules
/// - Must not be empty (after trimming); every listing renders an image
pub fn validate_image(image: &str) -> ValidationResult<()> {
    if image.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    Ok(())
}

/// Validates a category slug.
///
/// ## Rules
/// - Must not be empty (after trimming)
///
/// The slug is not checked against the fixed category list; the form
/// offers a closed choice, and an unknown slug merely lists the product
/// under no category.
pub fn validate_category(slug: &str) -> ValidationResult<()> {
    if slug.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Comment Validators
// =============================================================================

/// Validates a comment author name.
///
/// ## Rules
/// - Must not be empty (after trimming)
pub fn validate_comment_author(author: &str) -> ValidationResult<()> {
    if author.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "author".to_string(),
        });
    }

    Ok(())
}

/// Validates a comment body.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 1000 characters
pub fn validate_comment_text(text: &str) -> ValidationResult<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "text".to_string(),
        });
    }

    if text.chars().count() > 1000 {
        return Err(ValidationError::TooLong {
            field: "text".to_string(),
            max: 1000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
