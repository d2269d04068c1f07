//! # Sources Crate
//!
//! This crate implements catalog sources: the places a product collection
//! can come from before the synchronous core (indexing, categorization,
//! filtering) takes over.
//!
//! ## Components
//!
//! ### JsonFileSource
//! Reads a JSON catalog file from disk asynchronously. This models the seam
//! the backend fetch delivers through; the core never cares which source
//! produced the collection.
//!
//! ### SeedSource
//! The built-in demo listing, externalized as data. Used when no catalog
//! file is supplied, and as a fixture in tests and benchmarks.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{JsonFileSource, SeedSource};
//! use catalog::Catalog;
//!
//! let products = match catalog_path {
//!     Some(path) => JsonFileSource::new(path).fetch().await?,
//!     None => SeedSource::new().fetch().await?,
//! };
//! let catalog = Catalog::from_products(products);
//! ```

// Public modules
pub mod json_file;
pub mod seed;

// Re-export commonly used types
pub use json_file::JsonFileSource;
pub use seed::{seed_products, SeedSource};
