//! # Durable Storage
//!
//! A string key-value store that outlives the process, plus the JSON helpers
//! the stores use on top of it.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Keys                                         │
//! │                                                                         │
//! │  user       → SessionUser          (current session, identity only)    │
//! │  users      → [Account]            (self-registered accounts)          │
//! │  suppliers  → [Supplier]                                               │
//! │  products   → [Product]                                                │
//! │                                                                         │
//! │  MemoryStorage  HashMap<String, String> in process                     │
//! │  FileStorage    <data_dir>/<key>.json, written via <key>.json.tmp      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are JSON with camelCase field names, so a data directory written by
//! one build is readable by the next.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Storage keys used by the stores.
pub mod keys {
    /// Current session identity.
    pub const USER: &str = "user";
    /// Self-registered accounts.
    pub const USERS: &str = "users";
    pub const SUPPLIERS: &str = "suppliers";
    pub const PRODUCTS: &str = "products";
}

// =============================================================================
// Storage Trait
// =============================================================================

/// Durable string key-value storage.
///
/// Implementations must be shareable across the session and inventory
/// stores, which hold the same `Arc<dyn Storage>`.
pub trait Storage: Send + Sync + fmt::Debug {
    /// Returns the raw value, or `None` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes (or overwrites) a value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-process storage, lost on exit.
///
/// ## Usage
/// ```rust
/// use pastry_store::storage::{MemoryStorage, Storage};
///
/// let storage = MemoryStorage::new();
/// storage.set("user", "{}").unwrap();
/// assert_eq!(storage.get("user").unwrap().as_deref(), Some("{}"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic mid-insert cannot leave a HashMap half-written.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// One JSON file per key under a data directory.
///
/// Writes land in `<key>.json.tmp` first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (creating if needed) a data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.display().to_string(), e))?;
        debug!(dir = %dir.display(), "File storage opened");
        Ok(FileStorage { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StoreError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(key, e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }
}

// =============================================================================
// JSON Helpers
// =============================================================================

/// Reads and decodes a JSON entry.
///
/// Absent → `Ok(None)`; present but undecodable → [`StoreError::Corrupt`].
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> StoreResult<Option<T>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StoreError::corrupt(key, e))
}

/// Encodes and writes a JSON entry.
pub fn save_json<T: Serialize + ?Sized>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

/// Writes a JSON entry, logging instead of failing.
///
/// The in-memory state is the source of truth; a failed write only means
/// the next session starts from older data.
pub fn persist<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) {
    if let Err(e) = save_json(storage, key, value) {
        warn!(key, error = %e, "Failed to persist collection, keeping in-memory state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("user").unwrap(), None);

        storage.set("user", "a").unwrap();
        storage.set("user", "b").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("b"));

        storage.remove("user").unwrap();
        storage.remove("user").unwrap();
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("data")).unwrap();

        storage.set("suppliers", "[]").unwrap();
        assert!(dir.path().join("data/suppliers.json").exists());
        assert!(!dir.path().join("data/suppliers.json.tmp").exists());
        assert_eq!(storage.get("suppliers").unwrap().as_deref(), Some("[]"));

        storage.remove("suppliers").unwrap();
        assert_eq!(storage.get("suppliers").unwrap(), None);
        storage.remove("suppliers").unwrap();
    }

    #[test]
    fn test_load_json_reports_corrupt_entries() {
        let storage = MemoryStorage::new();
        storage.set("products", "{not json").unwrap();

        let result: StoreResult<Option<Vec<Entry>>> = load_json(&storage, "products");
        assert!(matches!(result, Err(StoreError::Corrupt { key, .. }) if key == "products"));
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let entries = vec![Entry {
            name: "Manteiga".to_string(),
        }];

        save_json(&storage, "products", &entries).unwrap();
        let loaded: Option<Vec<Entry>> = load_json(&storage, "products").unwrap();
        assert_eq!(loaded, Some(entries));
    }
}
