//! Filter by free-text query.
//!
//! The second predicate of the catalog filter: case-insensitive substring
//! search over the product's name, category, and supplier.

use crate::state::FilterState;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Product;

/// Keeps only products matching the free-text query.
///
/// ## Algorithm
/// 1. Trim the query; if empty, every product passes
/// 2. Lower-case the trimmed query once
/// 3. A product passes if the query is a substring of the lower-cased
///    name, OR category, OR supplier
///
/// Absent fields are treated as the empty string, so a missing supplier can
/// never match but also never panics.
pub struct TextQueryFilter;

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.unwrap_or("").to_lowercase().contains(needle)
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn apply(&self, products: Vec<Product>, state: &FilterState) -> Result<Vec<Product>> {
        let query = state.trimmed_query();
        if query.is_empty() {
            return Ok(products);
        }
        let needle = query.to_lowercase();

        let filtered: Vec<Product> = products
            .into_iter()
            .filter(|product| {
                field_contains(product.name.as_deref(), &needle)
                    || field_contains(product.category.as_deref(), &needle)
                    || field_contains(product.supplier.as_deref(), &needle)
            })
            .collect();
        Ok(filtered)
    }
}
