//! Catalog building and indexing logic.
//!
//! This module builds the `Catalog` from parsed products:
//! - Insert products with id de-duplication
//! - Build secondary indices (category, supplier)
//! - Compute per-category aggregate statistics

use crate::error::Result;
use crate::parser;
use crate::types::{Catalog, CategoryStats, Product};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// Steps:
    /// 1. Parse the file into products
    /// 2. Insert all products (de-duplicating by id)
    /// 3. Build secondary indices (category, supplier)
    /// 4. Compute category statistics
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let products = parser::parse_products(path)?;
        tracing::info!(
            path = %path.display(),
            count = products.len(),
            "loaded catalog file"
        );
        Ok(Self::from_products(products))
    }

    /// Build a catalog from an already-fetched product collection.
    ///
    /// This is the entry point used when the (out-of-scope) backend fetch
    /// completes: the whole catalog is rebuilt from the new collection. An
    /// empty collection yields a valid empty catalog.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut catalog = Catalog::new();
        for product in products {
            catalog.insert_product(product);
        }
        catalog.build_secondary_indices();
        catalog.compute_category_stats();
        catalog
    }

    /// Build secondary indices after the product list is in place.
    ///
    /// The category index preserves first-appearance order of labels, which
    /// is also the order the category set is derived in downstream. Products
    /// without a category (or with an empty-string one) are uncategorized
    /// and indexed under neither.
    pub fn build_secondary_indices(&mut self) {
        self.category_index.clear();
        self.supplier_index.clear();

        for product in &self.products {
            if let Some(category) = product.category_label() {
                let slot = self
                    .category_index
                    .iter()
                    .position(|(label, _)| label == category);
                match slot {
                    Some(pos) => self.category_index[pos].1.push(product.id.clone()),
                    None => self
                        .category_index
                        .push((category.to_string(), vec![product.id.clone()])),
                }
            }

            if let Some(supplier) = product.supplier.as_deref().filter(|s| !s.is_empty()) {
                self.supplier_index
                    .entry(supplier.to_string())
                    .or_default()
                    .push(product.id.clone());
            }
        }
    }

    /// Compute aggregate statistics per category, in parallel.
    pub fn compute_category_stats(&mut self) {
        self.category_stats = self
            .products
            .par_iter()
            .fold(HashMap::<String, CategoryStats>::new, |mut acc, product| {
                let Some(category) = product.category_label() else {
                    return acc;
                };
                let stats = acc.entry(category.to_string()).or_insert(CategoryStats {
                    product_count: 0,
                    in_stock_count: 0,
                    min_price: None,
                    max_price: None,
                });
                stats.product_count += 1;
                if product.stock.unwrap_or(0) > 0 {
                    stats.in_stock_count += 1;
                }
                if let Some(price) = product.price {
                    stats.min_price = Some(stats.min_price.map_or(price, |m| m.min(price)));
                    stats.max_price = Some(stats.max_price.map_or(price, |m| m.max(price)));
                }
                acc
            })
            .reduce(HashMap::new, |mut left, right| {
                for (category, stats) in right {
                    left.entry(category)
                        .and_modify(|merged| {
                            merged.product_count += stats.product_count;
                            merged.in_stock_count += stats.in_stock_count;
                            merged.min_price = match (merged.min_price, stats.min_price) {
                                (Some(a), Some(b)) => Some(a.min(b)),
                                (a, b) => a.or(b),
                            };
                            merged.max_price = match (merged.max_price, stats.max_price) {
                                (Some(a), Some(b)) => Some(a.max(b)),
                                (a, b) => a.or(b),
                            };
                        })
                        .or_insert(stats);
                }
                left
            });
    }
}
