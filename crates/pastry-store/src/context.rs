//! # App Context
//!
//! The one object a front-end holds: storage, session and inventory wired
//! together from an [`AppConfig`].
//!
//! ```text
//! AppContext::open(&config)
//!      │
//!      ├── storage   = Memory | File(config.data_dir())
//!      ├── session   = SessionStore::open(storage, AccountRegistry, auth)
//!      └── inventory = SharedInventory(InventoryStore::open(storage))
//! ```

use std::sync::Arc;
use tracing::info;

use crate::accounts::AccountRegistry;
use crate::config::{AppConfig, StorageBackend};
use crate::error::StoreResult;
use crate::inventory::{InventoryStore, SharedInventory};
use crate::session::SessionStore;
use crate::storage::{FileStorage, MemoryStorage, Storage};

/// Process-wide application state. Cloning shares the same stores.
#[derive(Debug, Clone)]
pub struct AppContext {
    storage: Arc<dyn Storage>,
    session: Arc<SessionStore>,
    inventory: SharedInventory,
}

impl AppContext {
    /// Builds the configured storage and opens both stores over it.
    pub fn open(config: &AppConfig) -> StoreResult<Self> {
        let storage: Arc<dyn Storage> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
            StorageBackend::File => Arc::new(FileStorage::open(config.data_dir())?),
        };
        info!(backend = %config.storage.backend, "Opening app context");

        Self::with_storage(storage, config)
    }

    /// Opens both stores over an existing storage handle.
    pub fn with_storage(storage: Arc<dyn Storage>, config: &AppConfig) -> StoreResult<Self> {
        let session = SessionStore::open(
            storage.clone(),
            AccountRegistry::new(storage.clone()),
            config.auth_config(),
        );
        let inventory = InventoryStore::open(storage.clone())?;

        Ok(AppContext {
            storage,
            session: Arc::new(session),
            inventory: SharedInventory::new(inventory),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn accounts(&self) -> &AccountRegistry {
        self.session.accounts()
    }

    /// A handle to the shared inventory.
    pub fn inventory(&self) -> SharedInventory {
        self.inventory.clone()
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }
}
