//! # Storage Error Types
//!
//! Error types for the key-value medium.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error (from the medium)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store layer converts to silent recovery:                               │
//! │    • failed read of a snapshot  → treated as absent, empty state        │
//! │    • failed write of a snapshot → logged at warn, then dropped          │
//! │                                                                         │
//! │  Nothing above the medium returns StoreError to a view. The error      │
//! │  type exists so the medium itself stays honest and testable.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage medium errors.
///
/// These wrap the file and JSON errors underneath the medium and carry
/// enough context for the warn-level log lines in the stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File read/write/create failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - Disk full or file permissions issue
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Key file exists but is not the expected JSON object.
    ///
    /// ## When This Occurs
    /// - Hand-edited data file
    /// - Partial write from a crashed process
    #[error("storage serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Another holder of the in-memory medium panicked mid-write.
    #[error("storage mutex poisoned")]
    Poisoned,
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
