//! Category index builder.
//!
//! Derives the set of category labels offered to the user from the current
//! product collection. Recomputed whenever the collection changes.

use crate::state::ALL_CATEGORIES;
use catalog::Product;
use std::collections::HashSet;

/// Build the ordered category set for a product collection.
///
/// ## Contract
/// - Output always begins with the literal `"All"` sentinel
/// - Followed by each distinct non-empty category, in order of first
///   appearance in the input
/// - No duplicates; absent and empty-string categories are skipped
/// - Empty input yields `["All"]`
///
/// Pure function: no side effects, no I/O.
pub fn build_categories<'a, I>(products: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    let mut seen = HashSet::new();

    for product in products {
        if let Some(category) = product.category_label() {
            if seen.insert(category) {
                categories.push(category.to_string());
            }
        }
    }

    categories
}
