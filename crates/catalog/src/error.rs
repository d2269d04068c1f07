//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading and validating a catalog
///
/// The category index builder and the filter engine are total functions and
/// have no error kinds of their own; everything here belongs to the loading
/// path (file access, JSON shape, record validation).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog payload wasn't valid JSON of the expected shape
    #[error("JSON error in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A product field had an invalid value
    #[error("Invalid value for {field} in product at position {position}: {value}")]
    InvalidValue {
        field: String,
        position: usize,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
