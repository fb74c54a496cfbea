//! # pastry-core: Pure Domain Logic for Pastry Inventory
//!
//! This crate holds the record shapes, field rules and money arithmetic of
//! the inventory system as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pastry Inventory Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (browser views)                    │   │
//! │  │    Login ──► Dashboard ──► Suppliers ──► Products               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ context objects                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    pastry-store                                 │   │
//! │  │    SessionStore, InventoryStore, Storage backends               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pastry-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   vocab   │  │ validation│  │   │
//! │  │   │ Supplier  │  │   Money   │  │ categories│  │   rules   │  │   │
//! │  │   │ Product   │  │           │  │ units     │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Supplier, Product, SessionUser, Account)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`vocab`] - Suggested categories and units of measure
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation applied at the store boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use pastry_core::money::Money;
//!
//! // 45 kg of flour at R$ 25.99 / kg
//! let price = Money::from_cents(2599);
//! let value = price.multiply_quantity(45);
//!
//! assert_eq!(value.cents(), 116_955);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod vocab;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of free-text fields (names, addresses, descriptions).
pub const MAX_TEXT_LEN: usize = 500;

/// Highest accepted unit price: R$ 1.000.000,00.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Number of entries the dashboard shows in "latest stock updates".
pub const RECENT_RESTOCK_LIMIT: usize = 5;
