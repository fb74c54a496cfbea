//! # Inventory Store
//!
//! The single in-memory source of truth for suppliers and products, mirrored
//! into durable storage after every mutation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryStore::open(storage)                                         │
//! │       │                                                                 │
//! │       ├── "suppliers" absent? → seed::suppliers() → persist            │
//! │       ├── "products"  absent? → seed::products()  → persist            │
//! │       ├── entry undecodable?  → StoreError::Corrupt                     │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────┐     mutation      ┌──────────────────┐   │
//! │  │ suppliers: Vec<Supplier> │ ────────────────► │ persist(key, ..) │   │
//! │  │ products:  Vec<Product>  │   (whole list)    │  best effort     │   │
//! │  └──────────────────────────┘                   └──────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Identifiers
//! Updating or deleting an id that is not present is a no-op reported as
//! `None`, never an error.

use chrono::Utc;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use pastry_core::validation::{validate_product_fields, validate_supplier_fields};
use pastry_core::{
    ensure_supplier_deletable, new_record_id, Product, ProductFields, Supplier, SupplierFields,
};

use crate::error::StoreResult;
use crate::query::{supplier_matches, InventorySummary, ProductFilter};
use crate::seed;
use crate::storage::{keys, load_json, persist, Storage};

// =============================================================================
// Inventory Store
// =============================================================================

/// Supplier and product collections plus their storage handle.
#[derive(Debug)]
pub struct InventoryStore {
    storage: Arc<dyn Storage>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
}

impl InventoryStore {
    /// Opens the inventory: rehydrate each collection, or seed it when absent.
    ///
    /// Each collection is handled independently, so a storage holding only
    /// `suppliers` still gets the example products.
    pub fn open(storage: Arc<dyn Storage>) -> StoreResult<Self> {
        let suppliers = match load_json::<Vec<Supplier>>(storage.as_ref(), keys::SUPPLIERS)? {
            Some(suppliers) => suppliers,
            None => {
                let suppliers = seed::suppliers();
                info!(count = suppliers.len(), "Seeding suppliers");
                persist(storage.as_ref(), keys::SUPPLIERS, &suppliers);
                suppliers
            }
        };

        let products = match load_json::<Vec<Product>>(storage.as_ref(), keys::PRODUCTS)? {
            Some(products) => products,
            None => {
                let products = seed::products();
                info!(count = products.len(), "Seeding products");
                persist(storage.as_ref(), keys::PRODUCTS, &products);
                products
            }
        };

        info!(
            suppliers = suppliers.len(),
            products = products.len(),
            "Inventory opened"
        );

        Ok(InventoryStore {
            storage,
            suppliers,
            products,
        })
    }

    /// All suppliers, in insertion order.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn persist_suppliers(&self) {
        persist(self.storage.as_ref(), keys::SUPPLIERS, &self.suppliers);
    }

    fn persist_products(&self) {
        persist(self.storage.as_ref(), keys::PRODUCTS, &self.products);
    }

    // =========================================================================
    // Supplier Operations
    // =========================================================================

    /// Adds a supplier, assigning its id and creation timestamp.
    pub fn add_supplier(&mut self, fields: SupplierFields) -> StoreResult<Supplier> {
        validate_supplier_fields(&fields)?;

        let supplier = Supplier::from_fields(new_record_id(), fields, Utc::now());
        debug!(id = %supplier.id, name = %supplier.name, "Adding supplier");

        self.suppliers.push(supplier.clone());
        self.persist_suppliers();
        Ok(supplier)
    }

    /// Replaces every mutable field of a supplier.
    ///
    /// Returns the updated record, or `None` if no supplier has `id`.
    pub fn update_supplier(
        &mut self,
        id: &str,
        fields: SupplierFields,
    ) -> StoreResult<Option<Supplier>> {
        validate_supplier_fields(&fields)?;

        let Some(supplier) = self.suppliers.iter_mut().find(|s| s.id == id) else {
            debug!(id, "Supplier not found, update ignored");
            return Ok(None);
        };
        supplier.apply(fields);
        let updated = supplier.clone();
        debug!(id, "Supplier updated");

        self.persist_suppliers();
        Ok(Some(updated))
    }

    /// Deletes a supplier that no product references.
    ///
    /// ## When This Fails
    /// ```text
    /// delete_supplier("2")
    ///      │
    ///      ├── 2 products reference "2" → Err(SupplierHasProducts { count: 2 })
    ///      ├── no supplier "2"          → Ok(None)
    ///      └── otherwise                → Ok(Some(removed))
    /// ```
    pub fn delete_supplier(&mut self, id: &str) -> StoreResult<Option<Supplier>> {
        let count = self.product_count_for_supplier(id);
        if let Err(e) = ensure_supplier_deletable(id, count) {
            debug!(id, count, "Refusing to delete supplier with products");
            return Err(e.into());
        }

        let Some(index) = self.suppliers.iter().position(|s| s.id == id) else {
            debug!(id, "Supplier not found, delete ignored");
            return Ok(None);
        };
        let removed = self.suppliers.remove(index);
        debug!(id, "Supplier deleted");

        self.persist_suppliers();
        Ok(Some(removed))
    }

    pub fn get_supplier_by_id(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    // =========================================================================
    // Product Operations
    // =========================================================================

    fn warn_if_dangling(&self, product: &Product) {
        if self.get_supplier_by_id(&product.supplier_id).is_none() {
            warn!(
                product_id = %product.id,
                supplier_id = %product.supplier_id,
                "Product references an unknown supplier"
            );
        }
    }

    /// Adds a product, assigning its id and restock timestamp.
    pub fn add_product(&mut self, fields: ProductFields) -> StoreResult<Product> {
        validate_product_fields(&fields)?;

        let product = Product::from_fields(new_record_id(), fields, Utc::now());
        debug!(id = %product.id, name = %product.name, "Adding product");
        self.warn_if_dangling(&product);

        self.products.push(product.clone());
        self.persist_products();
        Ok(product)
    }

    /// Replaces every mutable field of a product.
    ///
    /// `last_restocked` is carried forward; only [`Self::update_stock`]
    /// refreshes it.
    pub fn update_product(
        &mut self,
        id: &str,
        fields: ProductFields,
    ) -> StoreResult<Option<Product>> {
        validate_product_fields(&fields)?;

        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            debug!(id, "Product not found, update ignored");
            return Ok(None);
        };
        product.apply(fields);
        let updated = product.clone();
        debug!(id, "Product updated");
        self.warn_if_dangling(&updated);

        self.persist_products();
        Ok(Some(updated))
    }

    /// Removes a product unconditionally.
    pub fn delete_product(&mut self, id: &str) -> Option<Product> {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            debug!(id, "Product not found, delete ignored");
            return None;
        };
        let removed = self.products.remove(index);
        debug!(id, "Product deleted");

        self.persist_products();
        Some(removed)
    }

    /// Sets the stock on hand and stamps `last_restocked` with now.
    pub fn update_stock(&mut self, id: &str, quantity: u32) -> Option<Product> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            debug!(id, "Product not found, stock update ignored");
            return None;
        };
        let previous = product.stock_quantity;
        product.stock_quantity = quantity;
        product.last_restocked = Utc::now();
        let updated = product.clone();
        debug!(id, previous, quantity, "Stock updated");

        self.persist_products();
        Some(updated)
    }

    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products at or below their minimum, in collection order.
    pub fn get_low_stock_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Products passing `filter`, in collection order.
    pub fn filter_products(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Suppliers whose name, contact or email contains `term`.
    pub fn search_suppliers(&self, term: &str) -> Vec<&Supplier> {
        self.suppliers
            .iter()
            .filter(|s| supplier_matches(s, term))
            .collect()
    }

    /// Number of products sourced from supplier `id`.
    pub fn product_count_for_supplier(&self, id: &str) -> usize {
        self.products.iter().filter(|p| p.supplier_id == id).count()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::compute(&self.suppliers, &self.products)
    }

    /// Most recently restocked products first, at most `limit`.
    pub fn recently_restocked(&self, limit: usize) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.iter().collect();
        products.sort_by(|a, b| b.last_restocked.cmp(&a.last_restocked));
        products.truncate(limit);
        products
    }
}

// =============================================================================
// Shared Inventory
// =============================================================================

/// Cloneable handle to one inventory, for front-end layers that each hold
/// their own copy of the context.
#[derive(Debug, Clone)]
pub struct SharedInventory {
    inner: Arc<Mutex<InventoryStore>>,
}

impl SharedInventory {
    pub fn new(store: InventoryStore) -> Self {
        SharedInventory {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the inventory.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = inventory.with_inventory(|inv| inv.summary());
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryStore) -> R,
    {
        let store = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&store)
    }

    /// Executes a function with write access to the inventory.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// inventory.with_inventory_mut(|inv| inv.update_stock("2", 30));
    /// ```
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryStore) -> R,
    {
        let mut store = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::storage::MemoryStorage;
    use pastry_core::{CoreError, StockLevel, ValidationError};

    fn open() -> InventoryStore {
        InventoryStore::open(Arc::new(MemoryStorage::new())).unwrap()
    }

    fn flour_fields(supplier_id: &str, stock: u32, minimum: u32) -> ProductFields {
        ProductFields {
            name: "Farinha Integral".to_string(),
            description: "Para massa integral".to_string(),
            supplier_id: supplier_id.to_string(),
            price_cents: 1990,
            stock_quantity: stock,
            unit: "kg".to_string(),
            category: "Ingredientes".to_string(),
            minimum_stock: minimum,
            image: None,
        }
    }

    fn supplier_fields(name: &str) -> SupplierFields {
        SupplierFields {
            name: name.to_string(),
            contact_name: "Carla".to_string(),
            phone: "(11) 90000-0000".to_string(),
            email: "carla@laticinios.com".to_string(),
            address: "Rua do Leite, 1".to_string(),
        }
    }

    #[test]
    fn test_open_seeds_empty_storage() {
        let store = open();
        assert_eq!(store.suppliers().len(), 2);
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_add_supplier_assigns_id_and_timestamp() {
        let mut store = open();
        let before = Utc::now();
        let added = store.add_supplier(supplier_fields("Laticínios Serra")).unwrap();

        assert!(!added.id.is_empty());
        assert!(added.created_at >= before);
        assert_eq!(store.get_supplier_by_id(&added.id), Some(&added));
    }

    #[test]
    fn test_add_supplier_rejects_bad_email() {
        let mut store = open();
        let mut fields = supplier_fields("Laticínios Serra");
        fields.email = "carla".to_string();

        let err = store.add_supplier(fields).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
        assert_eq!(store.suppliers().len(), 2);
    }

    #[test]
    fn test_update_supplier_keeps_id_and_created_at() {
        let mut store = open();
        let original = store.get_supplier_by_id("1").cloned().unwrap();

        let updated = store
            .update_supplier("1", supplier_fields("Moinho Novo"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "Moinho Novo");
        assert!(store.update_supplier("404", supplier_fields("X")).unwrap().is_none());
    }

    #[test]
    fn test_delete_supplier_with_products_fails() {
        let mut store = open();
        let err = store.delete_supplier("2").unwrap_err();

        assert!(matches!(
            err,
            StoreError::Core(CoreError::SupplierHasProducts { ref id, count: 2 }) if id == "2"
        ));
        assert!(store.get_supplier_by_id("2").is_some());
    }

    #[test]
    fn test_delete_supplier_without_products() {
        let mut store = open();
        let added = store.add_supplier(supplier_fields("Embalagens Sul")).unwrap();

        let removed = store.delete_supplier(&added.id).unwrap();
        assert_eq!(removed.map(|s| s.id), Some(added.id.clone()));
        assert!(store.get_supplier_by_id(&added.id).is_none());
        assert!(store.delete_supplier(&added.id).unwrap().is_none());
    }

    #[test]
    fn test_update_product_preserves_last_restocked() {
        let mut store = open();
        let before = store.get_product_by_id("3").cloned().unwrap();

        let updated = store
            .update_product("3", flour_fields("2", 1, 10))
            .unwrap()
            .unwrap();

        assert_eq!(updated.last_restocked, before.last_restocked);
        assert_eq!(updated.stock_quantity, 1);
    }

    #[test]
    fn test_update_stock_refreshes_last_restocked() {
        let mut store = open();
        let before = store.get_product_by_id("2").cloned().unwrap();

        let updated = store.update_stock("2", 30).unwrap();

        assert_eq!(updated.stock_quantity, 30);
        assert!(updated.last_restocked > before.last_restocked);
        assert!(store.update_stock("404", 1).is_none());
    }

    #[test]
    fn test_low_stock_scenario() {
        let mut store = open();
        for id in ["1", "2", "3"] {
            store.delete_product(id);
        }
        let a = store.add_product(flour_fields("1", 5, 10)).unwrap();
        store.add_product(flour_fields("1", 20, 10)).unwrap();
        let at_threshold = store.add_product(flour_fields("1", 10, 10)).unwrap();

        let low: Vec<_> = store.get_low_stock_products().into_iter().cloned().collect();
        assert_eq!(low, vec![a.clone(), at_threshold.clone()]);
        assert_eq!(a.stock_level(), StockLevel::Critical);
        assert_eq!(at_threshold.stock_level(), StockLevel::Low);
    }

    #[test]
    fn test_add_product_rejects_price_above_cap() {
        let mut store = open();
        let mut fields = flour_fields("1", 3, 1);
        fields.price_cents = i64::MAX / 2;

        let err = store.add_product(fields).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_add_product_with_unknown_supplier_is_accepted() {
        let mut store = open();
        let added = store.add_product(flour_fields("999", 1, 1)).unwrap();
        assert!(store.get_product_by_id(&added.id).is_some());
    }

    #[test]
    fn test_recently_restocked_orders_by_date() {
        let mut store = open();
        store.update_stock("2", 40);

        let ids: Vec<_> = store
            .recently_restocked(2)
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_product_count_for_supplier() {
        let store = open();
        assert_eq!(store.product_count_for_supplier("1"), 1);
        assert_eq!(store.product_count_for_supplier("2"), 2);
        assert_eq!(store.product_count_for_supplier("3"), 0);
    }

    #[test]
    fn test_shared_inventory_clones_see_same_state() {
        let shared = SharedInventory::new(open());
        let other = shared.clone();

        other.with_inventory_mut(|inv| inv.delete_product("1"));
        assert_eq!(shared.with_inventory(|inv| inv.products().len()), 2);
    }
}
