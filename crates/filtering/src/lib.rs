//! Pipeline for filtering and categorizing the product catalog.
//!
//! This crate provides:
//! - Filter trait and implementations for product filtering
//! - FilterPipeline for composing filters
//! - Category index builder for deriving the category set
//! - FilterState holding the current (category, query) pair
//!
//! ## Architecture
//! The catalog screen recomputes two derived views whenever its inputs
//! change:
//! 1. `build_categories` derives the category chips from the product list
//! 2. `filter_products` applies the category and text predicates to produce
//!    the visible subset, order preserved
//!
//! Both are pure, synchronous computations; there is nothing to cache and
//! nothing to lock.
//!
//! ## Example Usage
//! ```ignore
//! use filtering::{build_categories, filter_products, FilterState};
//!
//! let categories = build_categories(catalog.products());
//!
//! let mut state = FilterState::new();
//! state.select_category("Steel");
//! state.set_query("tmt");
//!
//! let visible = filter_products(catalog.products().to_vec(), &state)?;
//! ```

pub mod traits;
pub mod state;
pub mod categories;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use categories::build_categories;
pub use filter_pipeline::FilterPipeline;
pub use state::{FilterState, ALL_CATEGORIES};
pub use traits::Filter;

use crate::filters::{CategoryFilter, TextQueryFilter};
use anyhow::Result;
use catalog::Product;

/// Filter a product collection by the current state.
///
/// The standard catalog pipeline: category predicate AND text predicate,
/// stable order, input never mutated (it is consumed and rebuilt). This is
/// recomputed from scratch on any change to products, category, or query.
pub fn filter_products(products: Vec<Product>, state: &FilterState) -> Result<Vec<Product>> {
    FilterPipeline::new()
        .add_filter(CategoryFilter)
        .add_filter(TextQueryFilter)
        .apply(products, state)
}
