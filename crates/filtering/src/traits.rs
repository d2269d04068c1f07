//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a product collection.

use crate::state::FilterState;
use anyhow::Result;
use catalog::Product;

/// Core trait for filtering products.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Product> and return a filtered Vec
/// - Filters must be stable: they preserve the relative input order and
///   never sort
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a product collection.
    ///
    /// # Arguments
    /// * `products` - The products to filter (takes ownership)
    /// * `state` - The current (category, query) filter state
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - The filtered products, input order preserved
    /// * `Err` - If filtering fails
    fn apply(&self, products: Vec<Product>, state: &FilterState) -> Result<Vec<Product>>;
}
