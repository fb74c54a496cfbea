//! # pastry-store: State Management for Pastry Inventory
//!
//! This crate owns every side effect of the inventory system: durable
//! key-value storage, the signed-in session and the supplier/product
//! collections.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pastry Inventory Data Flow                          │
//! │                                                                         │
//! │  Front-end view (Products page: "Atualizar estoque")                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pastry-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  AppContext   │    │    Stores     │    │   Storage    │  │   │
//! │  │   │ (context.rs)  │    │               │    │ (storage.rs) │  │   │
//! │  │   │               │───►│ SessionStore  │───►│ MemoryStorage│  │   │
//! │  │   │ AppConfig     │    │ AccountReg.   │    │ FileStorage  │  │   │
//! │  │   │ (config.rs)   │    │ InventoryStore│    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data_dir>/{user,users,suppliers,products}.json               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - Storage trait, memory and file backends, JSON helpers
//! - [`inventory`] - Supplier/product collections and mutations
//! - [`query`] - Product filters, supplier search, dashboard summary
//! - [`session`] - Sign-in, sign-out, current identity
//! - [`accounts`] - Demo identities and self-registered accounts
//! - [`config`] - TOML + environment configuration
//! - [`context`] - Wires everything together
//! - [`seed`] - Example data for a first launch
//! - [`error`] - Store and auth error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pastry_store::{AppConfig, AppContext};
//!
//! let ctx = AppContext::open(&AppConfig::load_or_default(None))?;
//! ctx.session().sign_in("admin@pastry.com", "password").await?;
//!
//! let low = ctx.inventory().with_inventory(|inv| inv.get_low_stock_products().len());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accounts;
pub mod config;
pub mod context;
pub mod error;
pub mod inventory;
pub mod query;
pub mod seed;
pub mod session;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use accounts::AccountRegistry;
pub use config::{AppConfig, ConfigError, StorageBackend};
pub use context::AppContext;
pub use error::{AuthError, AuthResult, StoreError, StoreResult};
pub use inventory::{InventoryStore, SharedInventory};
pub use query::{InventorySummary, ProductFilter, StockFilter};
pub use session::{AuthConfig, SessionStore};
pub use storage::{FileStorage, MemoryStorage, Storage};
