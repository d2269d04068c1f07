//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::state::FilterState;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Product;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter)
///     .add_filter(TextQueryFilter);
///
/// let filtered = pipeline.apply(products, &state)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the products.
    ///
    /// ## Algorithm
    /// 1. Start with the input products
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// Each filter preserves relative order, so the composition does too.
    ///
    /// # Arguments
    /// * `products` - The products to filter
    /// * `state` - The current filter state
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - The filtered products after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, products: Vec<Product>, state: &FilterState) -> Result<Vec<Product>> {
        let mut current = products;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{CategoryFilter, TextQueryFilter};

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("p-1")
                .with_name("TMT Bar")
                .with_category("Steel")
                .with_supplier("JSW"),
            Product::new("p-2")
                .with_name("Cement Bag")
                .with_category("Cement")
                .with_supplier("ACC"),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let state = FilterState::new();

        let filtered = pipeline.apply(sample_products(), &state).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_both_predicates_combine_with_and() {
        let pipeline = FilterPipeline::new()
            .add_filter(CategoryFilter)
            .add_filter(TextQueryFilter);

        // Category "Steel" AND query "acc": nothing satisfies both
        let state = FilterState::with("Steel", "acc");
        let filtered = pipeline.apply(sample_products(), &state).unwrap();
        assert!(filtered.is_empty());

        // Category "Steel" AND query "jsw": p-1 satisfies both
        let state = FilterState::with("Steel", "jsw");
        let filtered = pipeline.apply(sample_products(), &state).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p-1");
    }
}
