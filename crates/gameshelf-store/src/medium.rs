//! # Storage Medium
//!
//! The key-value abstraction underneath every store: string keys, string
//! values, nothing else.
//!
//! ## Medium Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       StorageMedium (trait)                             │
//! │                                                                         │
//! │   get(key) ─► Option<String>      set(key, value)      remove(key)     │
//! │                                                                         │
//! │  ┌──────────────────────────┐   ┌──────────────────────────────────┐  │
//! │  │       MemoryMedium        │   │           FileMedium             │  │
//! │  │  ──────────────────────  │   │  ──────────────────────────────  │  │
//! │  │  Mutex<HashMap<K, V>>    │   │  one JSON object file            │  │
//! │  │  for tests and           │   │  { "gameshelf-cart": "...",      │  │
//! │  │  ephemeral sessions      │   │    "comments:3": "...", ... }    │  │
//! │  │                          │   │  every get re-reads the file     │  │
//! │  └──────────────────────────┘   └──────────────────────────────────┘  │
//! │                                                                         │
//! │  KeyWatcher: remembers one key's value, reports when it changed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why One Flat Namespace?
//! The stores were written against a browser-localStorage shape: opaque
//! string values under string keys, no schema below that. Keeping the file
//! backend a single JSON object keeps that shape honest, and re-reading it
//! on every `get` means writes from another process show up without any
//! notification channel.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// StorageMedium Trait
// =============================================================================

/// A key-value storage backend.
///
/// All methods take `&self`; implementations use interior mutability so a
/// single handle can be shared between stores as `Arc<dyn StorageMedium>`.
pub trait StorageMedium: Send + Sync {
    /// Reads the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Medium
// =============================================================================

/// In-memory medium backed by a `HashMap`.
///
/// Used by tests and by sessions that do not want anything on disk. The
/// mutex exists only for interior mutability behind `&self`; the stores
/// themselves are single-threaded.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryMedium {
    /// Creates an empty in-memory medium.
    pub fn new() -> Self {
        MemoryMedium::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Medium
// =============================================================================

/// File-backed medium: the whole namespace is one JSON object on disk.
///
/// ## Consistency Model
/// Every `get` re-reads the file and every `set`/`remove` does a full
/// read-modify-write. That is deliberately naive: the data fits in a few
/// kilobytes, and it is what lets [`KeyWatcher`] observe writes made by
/// another process without any signalling.
#[derive(Debug, Clone)]
pub struct FileMedium {
    path: PathBuf,
}

impl FileMedium {
    /// Creates a medium over the given file. The file does not need to
    /// exist yet; it is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileMedium { path: path.into() }
    }

    /// Opens the medium at the platform data directory.
    ///
    /// ## Path Resolution
    /// - **macOS**: `~/Library/Application Support/com.gameshelf.storefront/storage.json`
    /// - **Windows**: `%APPDATA%\gameshelf\storefront\storage.json`
    /// - **Linux**: `~/.local/share/storefront/storage.json`
    ///
    /// ## Development Override
    /// Set `GAMESHELF_DATA_PATH` to use a custom file path instead.
    pub fn open_default() -> StoreResult<Self> {
        if let Ok(path) = std::env::var("GAMESHELF_DATA_PATH") {
            let path = PathBuf::from(path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            return Ok(FileMedium::new(path));
        }

        let proj_dirs = ProjectDirs::from("com", "gameshelf", "storefront").ok_or_else(|| {
            StoreError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine platform data directory",
            ))
        })?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(FileMedium::new(data_dir.join("storage.json")))
    }

    /// The file this medium reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole namespace. A missing file is the empty namespace.
    fn read_entries(&self) -> StoreResult<HashMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes the whole namespace back.
    fn write_entries(&self, entries: &HashMap<String, String>) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), keys = entries.len(), "storage file written");
        Ok(())
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

// =============================================================================
// Key Watcher
// =============================================================================

/// Passive change detector for a single key.
///
/// Remembers the key's raw value as of the last observation. [`check`]
/// re-reads it and reports a change once, then considers the new value
/// observed. There is no subscription and no callback; callers poll when
/// they care (the admin product listing polls on render).
///
/// [`check`]: KeyWatcher::check
#[derive(Debug)]
pub struct KeyWatcher {
    key: String,
    last_seen: Option<String>,
}

impl KeyWatcher {
    /// Starts watching `key`, treating its current value as already seen.
    ///
    /// A medium that cannot be read counts as "key absent", matching how
    /// the stores treat unreadable state everywhere else.
    pub fn new(medium: &dyn StorageMedium, key: &str) -> Self {
        let last_seen = medium.get(key).ok().flatten();
        KeyWatcher {
            key: key.to_string(),
            last_seen,
        }
    }

    /// The key under observation.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Polls the key.
    ///
    /// ## Returns
    /// - `None`: unchanged since the last observation
    /// - `Some(Some(value))`: another writer stored a new value
    /// - `Some(None)`: another writer removed the key
    pub fn check(&mut self, medium: &dyn StorageMedium) -> Option<Option<String>> {
        let current = medium.get(&self.key).ok().flatten();

        if current == self.last_seen {
            return None;
        }

        debug!(key = %self.key, removed = current.is_none(), "watched key changed");
        self.last_seen = current.clone();
        Some(current)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
