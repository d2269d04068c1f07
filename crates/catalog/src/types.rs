//! Core domain types for the RitzYard product catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the `Product` record as delivered by the catalog backend, and the
//! in-memory `Catalog` that owns the current product collection and its
//! secondary indices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque unique identifier for a product.
///
/// The backend treats this as an arbitrary token; it is the stable key for
/// list rendering and de-duplication, never parsed or interpreted.
pub type ProductId = String;

// =============================================================================
// Product
// =============================================================================

/// A single catalog item as supplied by the backend.
///
/// Every field except `id` is optional: real catalog payloads routinely omit
/// them, and the core must tolerate any combination of absent fields. For
/// text matching an absent field behaves as the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    /// Unit price; opaque pass-through, unused by filtering today
    #[serde(default)]
    pub price: Option<f64>,
    /// Units on hand; opaque pass-through, unused by filtering today
    #[serde(default)]
    pub stock: Option<u32>,
}

impl Product {
    /// Create a product with only an id; optional fields start absent.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: None,
            supplier: None,
            price: None,
            stock: None,
        }
    }

    /// Builder-style setter for `name`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style setter for `category`.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder-style setter for `supplier`.
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Builder-style setter for `price`.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Builder-style setter for `stock`.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Category label if present and non-empty.
    ///
    /// An empty-string category is treated as uncategorized, same as absent,
    /// so it never leaks into the derived category set.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Aggregate statistics for one category of the catalog.
///
/// Computed once when the catalog is (re)built, for fast display later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub product_count: u32,
    /// Products with known stock greater than zero
    pub in_stock_count: u32,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

// =============================================================================
// Catalog - The In-Memory Product Store
// =============================================================================

/// Owns the current product collection and its lookup indices.
///
/// Products are kept in insertion order; filtering downstream is a stable
/// filter over this order, never a sort. De-duplication is by `id`: a
/// re-sent id replaces the earlier record in place, keeping its position,
/// so filtered output order stays stable across catalog refreshes.
#[derive(Debug)]
pub struct Catalog {
    /// Products in first-seen order
    pub(crate) products: Vec<Product>,
    /// Position of each id in `products`
    pub(crate) by_id: HashMap<ProductId, usize>,

    // Secondary indices for specialized queries
    /// Product ids grouped by category, categories in first-appearance order
    pub(crate) category_index: Vec<(String, Vec<ProductId>)>,
    /// Product ids grouped by supplier
    pub(crate) supplier_index: HashMap<String, Vec<ProductId>>,

    // Precomputed statistics
    pub(crate) category_stats: HashMap<String, CategoryStats>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            by_id: HashMap::new(),
            category_index: Vec::new(),
            supplier_index: HashMap::new(),
            category_stats: HashMap::new(),
        }
    }

    // Getters - these return references, the Catalog keeps ownership

    /// All products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Get a product by id
    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&pos| &self.products[pos])
    }

    /// Get all product ids in a category
    ///
    /// Returns an empty slice for an unknown category.
    pub fn products_in_category(&self, category: &str) -> &[ProductId] {
        self.category_index
            .iter()
            .find(|(label, _)| label == category)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Get all product ids from a supplier
    pub fn products_from_supplier(&self, supplier: &str) -> &[ProductId] {
        self.supplier_index
            .get(supplier)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get precomputed statistics for a category
    pub fn category_stats(&self, category: &str) -> Option<&CategoryStats> {
        self.category_stats.get(category)
    }

    // Mutators - used while (re)building the catalog

    /// Insert a product, de-duplicating by id.
    ///
    /// A duplicate id replaces the earlier record in place; the secondary
    /// indices must be rebuilt afterwards via `build_secondary_indices`.
    pub fn insert_product(&mut self, product: Product) {
        match self.by_id.get(&product.id).copied() {
            Some(pos) => {
                tracing::debug!(id = %product.id, "replacing duplicate product id");
                self.products[pos] = product;
            }
            None => {
                self.by_id.insert(product.id.clone(), self.products.len());
                self.products.push(product);
            }
        }
    }

    /// Get counts for debugging/validation: (products, categories, suppliers)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.products.len(),
            self.category_index.len(),
            self.supplier_index.len(),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
