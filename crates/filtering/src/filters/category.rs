//! Filter by the selected category.
//!
//! This is the first predicate of the catalog filter: when a concrete
//! category is selected, only products carrying exactly that label pass.

use crate::state::{FilterState, ALL_CATEGORIES};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Product;

/// Keeps only products whose category equals the selected label.
///
/// ## Algorithm
/// - Selected category `"All"`: every product passes
/// - Otherwise: exact, case-sensitive equality against the product's
///   category field (consistent with how the category set was derived);
///   products without a category never match a concrete selection
pub struct CategoryFilter;

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply(&self, products: Vec<Product>, state: &FilterState) -> Result<Vec<Product>> {
        let selected = state.selected_category();
        if selected == ALL_CATEGORIES {
            return Ok(products);
        }

        let filtered: Vec<Product> = products
            .into_iter()
            .filter(|product| product.category.as_deref() == Some(selected))
            .collect();
        Ok(filtered)
    }
}
