//! # Domain Types
//!
//! Core records used throughout Pastry Inventory.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Supplier     │   │     Product     │   │   SessionUser   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  supplier_id    │   │  id             │       │
//! │  │  name           │   │  price_cents    │   │  name / email   │       │
//! │  │  contact_name   │   │  stock_quantity │   │  role           │       │
//! │  │  created_at     │   │  minimum_stock  │   └────────┬────────┘       │
//! │  └─────────────────┘   │  last_restocked │            │ identity()     │
//! │                        └─────────────────┘   ┌────────┴────────┐       │
//! │                                              │     Account     │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   │  + secret       │       │
//! │  │ SupplierFields  │   │  ProductFields  │   └─────────────────┘       │
//! │  │ (add / update)  │   │ (add / update)  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fields vs Records
//! `*Fields` structs carry exactly what a form submits. The store turns them
//! into records by adding the fields it owns (`id`, `created_at`,
//! `last_restocked`), so callers can never forge those.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Generates a fresh record identifier (UUID v4).
///
/// Identifiers are opaque strings; seeded records keep short literal ids.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Roles & Identities
// =============================================================================

/// Access level of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Self-registered accounts always get this role.
    #[default]
    Staff,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Staff => write!(f, "staff"),
        }
    }
}

/// Public profile of the authenticated user. Never carries a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A self-registered account as stored in the `users` collection.
///
/// The secret is stored in plaintext under the `password` key. This is a
/// demo credential store, not an authentication system.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "password")]
    pub secret: String,
    pub role: Role,
}

impl Account {
    /// Returns the identity fields, dropping the secret.
    pub fn identity(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Exact (case-sensitive) credential match.
    pub fn matches(&self, email: &str, secret: &str) -> bool {
        self.email == email && self.secret == secret
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("secret", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// Mutable supplier fields, as submitted by the supplier form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SupplierFields {
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A supplier products can be sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Opaque identifier, immutable.
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Immutable after creation.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Supplier {
    /// Builds a record from form fields plus the store-owned fields.
    pub fn from_fields(id: String, fields: SupplierFields, created_at: DateTime<Utc>) -> Self {
        Supplier {
            id,
            name: fields.name,
            contact_name: fields.contact_name,
            phone: fields.phone,
            email: fields.email,
            address: fields.address,
            created_at,
        }
    }

    /// Replaces every mutable field; `id` and `created_at` are untouched.
    pub fn apply(&mut self, fields: SupplierFields) {
        self.name = fields.name;
        self.contact_name = fields.contact_name;
        self.phone = fields.phone;
        self.email = fields.email;
        self.address = fields.address;
    }

    /// Returns the mutable fields (pre-fills the edit form).
    pub fn fields(&self) -> SupplierFields {
        SupplierFields {
            name: self.name.clone(),
            contact_name: self.contact_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

/// A supplier may only be deleted once no product references it.
pub fn ensure_supplier_deletable(id: &str, dependents: usize) -> CoreResult<()> {
    if dependents > 0 {
        return Err(CoreError::SupplierHasProducts {
            id: id.to_string(),
            count: dependents,
        });
    }
    Ok(())
}

// =============================================================================
// Product
// =============================================================================

/// Mutable product fields, as submitted by the product form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    /// Foreign key into the supplier collection.
    pub supplier_id: String,
    /// Unit price in cents.
    pub price_cents: i64,
    pub stock_quantity: u32,
    /// Unit of measure, see [`crate::vocab::UNITS`].
    pub unit: String,
    /// See [`crate::vocab::CATEGORIES`].
    pub category: String,
    pub minimum_stock: u32,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier, immutable.
    pub id: String,
    pub name: String,
    pub description: String,
    pub supplier_id: String,
    pub price_cents: i64,
    pub stock_quantity: u32,
    pub unit: String,
    pub category: String,
    pub minimum_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Refreshed by stock updates only.
    #[ts(as = "String")]
    pub last_restocked: DateTime<Utc>,
}

impl Product {
    /// Builds a record from form fields plus the store-owned fields.
    pub fn from_fields(id: String, fields: ProductFields, last_restocked: DateTime<Utc>) -> Self {
        Product {
            id,
            name: fields.name,
            description: fields.description,
            supplier_id: fields.supplier_id,
            price_cents: fields.price_cents,
            stock_quantity: fields.stock_quantity,
            unit: fields.unit,
            category: fields.category,
            minimum_stock: fields.minimum_stock,
            image: normalize_image(fields.image),
            last_restocked,
        }
    }

    /// Replaces every mutable field; `id` and `last_restocked` are untouched.
    ///
    /// Editing the stock quantity through the form is not a restock, so the
    /// timestamp is carried forward even when `stock_quantity` changes here.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.supplier_id = fields.supplier_id;
        self.price_cents = fields.price_cents;
        self.stock_quantity = fields.stock_quantity;
        self.unit = fields.unit;
        self.category = fields.category;
        self.minimum_stock = fields.minimum_stock;
        self.image = normalize_image(fields.image);
    }

    /// Returns the mutable fields (pre-fills the edit form).
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            supplier_id: self.supplier_id.clone(),
            price_cents: self.price_cents,
            stock_quantity: self.stock_quantity,
            unit: self.unit.clone(),
            category: self.category.clone(),
            minimum_stock: self.minimum_stock,
            image: self.image.clone(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Value of the units on hand (price × stock).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price() * self.stock_quantity
    }

    /// Stock is at or below the minimum threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.minimum_stock
    }

    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity == 0
    }

    /// Classifies stock against the minimum threshold.
    ///
    /// ```text
    ///   stock ≤ 50% of minimum  → Critical
    ///   stock ≤ minimum         → Low
    ///   otherwise               → Healthy
    /// ```
    ///
    /// Integer math (`stock × 2 ≤ minimum`), so a zero minimum never divides.
    pub fn stock_level(&self) -> StockLevel {
        let stock = u64::from(self.stock_quantity);
        let minimum = u64::from(self.minimum_stock);
        if stock * 2 <= minimum {
            StockLevel::Critical
        } else if stock <= minimum {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }
}

fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|url| !url.trim().is_empty())
}

/// Stock severity shown next to each product on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Critical,
    Low,
    Healthy,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32, minimum: u32) -> Product {
        Product::from_fields(
            "p1".to_string(),
            ProductFields {
                name: "Farinha de Trigo".to_string(),
                supplier_id: "1".to_string(),
                price_cents: 2599,
                stock_quantity: stock,
                unit: "kg".to_string(),
                category: "Ingredientes".to_string(),
                minimum_stock: minimum,
                ..Default::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_stock_level_thresholds() {
        assert_eq!(product(5, 10).stock_level(), StockLevel::Critical);
        assert_eq!(product(6, 10).stock_level(), StockLevel::Low);
        assert_eq!(product(10, 10).stock_level(), StockLevel::Low);
        assert_eq!(product(11, 10).stock_level(), StockLevel::Healthy);
        // Nothing on hand and no threshold set is still an empty shelf, so it
        // reads as Critical rather than Healthy.
        assert_eq!(product(0, 0).stock_level(), StockLevel::Critical);
        assert_eq!(product(3, 0).stock_level(), StockLevel::Healthy);
    }

    #[test]
    fn test_ensure_supplier_deletable() {
        assert!(ensure_supplier_deletable("1", 0).is_ok());
        assert!(matches!(
            ensure_supplier_deletable("1", 2),
            Err(CoreError::SupplierHasProducts { count: 2, .. })
        ));
    }

    #[test]
    fn test_huge_stock_value_does_not_overflow() {
        let mut p = product(3, 0);
        p.price_cents = i64::MAX / 2;
        assert_eq!(p.stock_value().cents(), i64::MAX);
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        assert!(product(10, 10).is_low_stock());
        assert!(!product(11, 10).is_low_stock());
        assert!(product(0, 10).is_out_of_stock());
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(product(45, 20).stock_value().cents(), 116_955);
    }

    #[test]
    fn test_apply_preserves_store_owned_fields() {
        let mut p = product(45, 20);
        let restocked = p.last_restocked;
        let mut fields = p.fields();
        fields.stock_quantity = 3;
        fields.name = "Farinha Integral".to_string();

        p.apply(fields);

        assert_eq!(p.id, "p1");
        assert_eq!(p.last_restocked, restocked);
        assert_eq!(p.stock_quantity, 3);
        assert_eq!(p.name, "Farinha Integral");
    }

    #[test]
    fn test_blank_image_is_dropped() {
        let mut fields = product(1, 1).fields();
        fields.image = Some("  ".to_string());
        let p = Product::from_fields("p2".to_string(), fields, Utc::now());
        assert_eq!(p.image, None);
    }

    #[test]
    fn test_account_identity_drops_secret() {
        let account = Account {
            id: "42".to_string(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            secret: "secret".to_string(),
            role: Role::Staff,
        };
        let identity = account.identity();
        let json = serde_json::to_string(&identity).unwrap();

        assert!(!json.contains("secret"));
        assert!(!format!("{:?}", account).contains("\"secret\""));
        assert!(account.matches("ana@x.com", "secret"));
        assert!(!account.matches("ANA@x.com", "secret"));
    }

    #[test]
    fn test_storage_shape_is_camel_case() {
        let json = serde_json::to_value(product(1, 2)).unwrap();
        assert!(json.get("supplierId").is_some());
        assert!(json.get("stockQuantity").is_some());
        assert!(json.get("lastRestocked").is_some());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::default(), Role::Staff);
    }
}
