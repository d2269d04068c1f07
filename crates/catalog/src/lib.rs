//! # Catalog Crate
//!
//! This crate owns the RitzYard product model and the in-memory catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, Catalog, CategoryStats)
//! - **parser**: Parse JSON catalog payloads into products
//! - **index**: Build the catalog and its secondary indices
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/catalog.json"))?;
//!
//! let product = catalog.get_product("p-1").unwrap();
//! let steel = catalog.products_in_category("Steel");
//!
//! println!("{} steel products", steel.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, CategoryStats, Product, ProductId};
