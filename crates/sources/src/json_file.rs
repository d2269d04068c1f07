//! JSON file catalog source.
//!
//! Reads a catalog payload from disk asynchronously and hands the parsed
//! product list to the synchronous core. This is the stand-in seam for the
//! backend fetch: when a real fetch completes, the product collection is
//! delivered through exactly the same shape.

use anyhow::{Context, Result};
use catalog::{parser, Product};
use std::path::PathBuf;
use tracing::debug;

/// Catalog source backed by a JSON file on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given catalog file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Fetch the product collection.
    ///
    /// The read is async; parsing and validation run to completion before
    /// returning. An empty file containing `[]` is a valid empty catalog.
    pub async fn fetch(&self) -> Result<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;

        let products = parser::parse_products_slice(&bytes, &self.path.display().to_string())
            .context("Failed to parse catalog file")?;

        debug!(
            path = %self.path.display(),
            count = products.len(),
            "fetched catalog from file"
        );
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_parses_products() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "p-1", "name": "TMT Bar", "category": "Steel"}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let products = source.fetch().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p-1");
        assert_eq!(products[0].category.as_deref(), Some("Steel"));
    }

    #[tokio::test]
    async fn test_fetch_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let source = JsonFileSource::new(file.path());
        let products = source.fetch().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let source = JsonFileSource::new("/nonexistent/catalog.json");
        assert!(source.fetch().await.is_err());
    }
}
