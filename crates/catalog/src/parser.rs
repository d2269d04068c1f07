//! Parser for catalog payloads.
//!
//! The backend delivers the catalog as a JSON array of product objects:
//!
//! ```json
//! [
//!   {"id": "p-1", "name": "TMT Bar", "category": "Steel", "supplier": "JSW",
//!    "price": 52000.0, "stock": 120},
//!   {"id": "p-2", "name": "Cement Bag"}
//! ]
//! ```
//!
//! Every field except `id` may be absent. Validation is deliberately thin:
//! the one hard requirement is a non-empty id, because the id is the stable
//! key for de-duplication and list rendering.

use crate::error::{CatalogError, Result};
use crate::types::Product;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse a catalog file into products.
///
/// The file must contain a JSON array of product objects. An empty array is
/// a valid (empty) catalog.
pub fn parse_products(path: &Path) -> Result<Vec<Product>> {
    let mut file = File::open(path).map_err(|_| CatalogError::FileNotFound {
        path: path.display().to_string(),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    parse_products_slice(&bytes, &path.display().to_string())
}

/// Parse an in-memory catalog payload.
///
/// `origin` names the payload in errors (a file path, a URL, "seed").
pub fn parse_products_slice(bytes: &[u8], origin: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> =
        serde_json::from_slice(bytes).map_err(|source| CatalogError::JsonError {
            file: origin.to_string(),
            source,
        })?;

    validate_products(&products)?;
    Ok(products)
}

/// Reject records the rest of the system cannot key on.
fn validate_products(products: &[Product]) -> Result<()> {
    for (position, product) in products.iter().enumerate() {
        if product.id.trim().is_empty() {
            return Err(CatalogError::InvalidValue {
                field: "id".to_string(),
                position,
                value: product.id.clone(),
            });
        }
    }
    Ok(())
}
