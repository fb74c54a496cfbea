//! # Inventory Queries
//!
//! Read-only views over the collections: list filters, supplier search and
//! the dashboard summary.
//!
//! ## Filter Combination
//! ```text
//! ProductFilter { search: "farinha", category: Some("Ingredientes"),
//!                 supplier_id: None, stock: StockFilter::Low }
//!
//!   product matches ⇔ search hit ∧ category hit ∧ supplier hit ∧ stock hit
//!   (an empty search or None field always hits)
//! ```

use serde::{Deserialize, Serialize};

use pastry_core::{Money, Product, Supplier};

// =============================================================================
// Product Filter
// =============================================================================

/// Stock condition for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    #[default]
    Any,
    /// At or below the minimum threshold.
    Low,
    /// Exactly zero on hand.
    Out,
}

impl StockFilter {
    fn matches(self, product: &Product) -> bool {
        match self {
            StockFilter::Any => true,
            StockFilter::Low => product.is_low_stock(),
            StockFilter::Out => product.is_out_of_stock(),
        }
    }
}

/// Product list filter. `Default` matches everything.
///
/// ## Usage
/// ```rust
/// use pastry_store::query::{ProductFilter, StockFilter};
///
/// let filter = ProductFilter::default()
///     .search("açúcar")
///     .stock(StockFilter::Low);
/// assert_eq!(filter.stock, StockFilter::Low);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive substring over name and description.
    pub search: String,
    /// Exact category.
    pub category: Option<String>,
    /// Exact supplier identifier.
    pub supplier_id: Option<String>,
    pub stock: StockFilter,
}

impl ProductFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn supplier(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }

    pub fn stock(mut self, stock: StockFilter) -> Self {
        self.stock = stock;
        self
    }

    /// Does `product` pass every active condition?
    pub fn matches(&self, product: &Product) -> bool {
        let term = self.search.trim().to_lowercase();
        let search_hit = term.is_empty()
            || contains_folded(&product.name, &term)
            || contains_folded(&product.description, &term);

        search_hit
            && self
                .category
                .as_deref()
                .map_or(true, |c| product.category == c)
            && self
                .supplier_id
                .as_deref()
                .map_or(true, |s| product.supplier_id == s)
            && self.stock.matches(product)
    }
}

/// `term` must already be lowercased.
fn contains_folded(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

/// Case-insensitive supplier search over name, contact name and email.
///
/// A blank term matches every supplier.
pub fn supplier_matches(supplier: &Supplier, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || contains_folded(&supplier.name, &term)
        || contains_folded(&supplier.contact_name, &term)
        || contains_folded(&supplier.email, &term)
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// Headline numbers shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_suppliers: usize,
    pub low_stock_count: usize,
    /// Σ price × stock over all products, in cents.
    pub inventory_value_cents: i64,
}

impl InventorySummary {
    /// Computes the summary in one pass over the products.
    pub fn compute(suppliers: &[Supplier], products: &[Product]) -> Self {
        let inventory_value: Money = products.iter().map(Product::stock_value).sum();
        InventorySummary {
            total_products: products.len(),
            total_suppliers: suppliers.len(),
            low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
            inventory_value_cents: inventory_value.cents(),
        }
    }

    pub fn inventory_value(&self) -> Money {
        Money::from_cents(self.inventory_value_cents)
    }
}
