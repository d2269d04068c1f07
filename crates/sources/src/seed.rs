//! Built-in seed catalog.
//!
//! The demo product listing shipped with the client, kept as data rather
//! than scattered through screen code. Used when no catalog file is given
//! and as a realistic fixture in tests and benchmarks.

use anyhow::Result;
use catalog::Product;
use tracing::debug;

/// Catalog source backed by the built-in demo listing.
pub struct SeedSource;

impl SeedSource {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the seed product collection.
    ///
    /// Async only to present the same seam as the file-backed source; the
    /// data is constructed in memory.
    pub async fn fetch(&self) -> Result<Vec<Product>> {
        let products = seed_products();
        debug!(count = products.len(), "fetched seed catalog");
        Ok(products)
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::new()
    }
}

/// The demo listing: construction materials from well-known suppliers.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("ry-001")
            .with_name("TMT Bar Fe500 12mm")
            .with_category("Steel")
            .with_supplier("JSW")
            .with_price(52_000.0)
            .with_stock(140),
        Product::new("ry-002")
            .with_name("TMT Bar Fe550 16mm")
            .with_category("Steel")
            .with_supplier("Tata")
            .with_price(54_500.0)
            .with_stock(90),
        Product::new("ry-003")
            .with_name("Steel Pipe 2in")
            .with_category("Steel")
            .with_supplier("Tata")
            .with_price(1_450.0)
            .with_stock(320),
        Product::new("ry-004")
            .with_name("OPC 53 Cement Bag 50kg")
            .with_category("Cement")
            .with_supplier("ACC")
            .with_price(380.0)
            .with_stock(1_200),
        Product::new("ry-005")
            .with_name("PPC Cement Bag 50kg")
            .with_category("Cement")
            .with_supplier("UltraTech")
            .with_price(360.0)
            .with_stock(0),
        Product::new("ry-006")
            .with_name("Red Clay Brick")
            .with_category("Bricks")
            .with_supplier("Local Kiln Co")
            .with_price(9.5)
            .with_stock(50_000),
        Product::new("ry-007")
            .with_name("Fly Ash Brick")
            .with_category("Bricks")
            .with_supplier("Local Kiln Co")
            .with_price(7.0)
            .with_stock(30_000),
        Product::new("ry-008")
            .with_name("Exterior Emulsion 20L")
            .with_category("Paint")
            .with_supplier("Asian Paints")
            .with_price(5_600.0)
            .with_stock(45),
        Product::new("ry-009")
            .with_name("CPVC Pipe 1in")
            .with_category("Plumbing")
            .with_supplier("Astral")
            .with_price(240.0)
            .with_stock(800),
        Product::new("ry-010")
            .with_name("River Sand (per tonne)")
            .with_category("Aggregates")
            .with_supplier("Local Kiln Co")
            .with_price(1_800.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_fetch() {
        let products = SeedSource::new().fetch().await.unwrap();
        assert!(!products.is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_records_are_fully_labeled() {
        // Seed data is demo content; every record carries name, category,
        // and supplier so all screens have something to show
        for product in seed_products() {
            assert!(product.name.is_some(), "{} missing name", product.id);
            assert!(product.category_label().is_some(), "{} missing category", product.id);
            assert!(product.supplier.is_some(), "{} missing supplier", product.id);
        }
    }
}
