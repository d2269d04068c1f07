//! Integration tests for catalog filtering.
//!
//! These tests exercise the category index builder and the filter pipeline
//! together over a realistic product collection.

use catalog::Product;
use filtering::{build_categories, filter_products, FilterState, ALL_CATEGORIES};

fn construction_catalog() -> Vec<Product> {
    vec![
        Product::new("1")
            .with_name("TMT Bar")
            .with_category("Steel")
            .with_supplier("JSW"),
        Product::new("2")
            .with_name("Cement Bag")
            .with_category("Cement")
            .with_supplier("ACC"),
        Product::new("3")
            .with_name("Steel Pipe")
            .with_category("Steel")
            .with_supplier("Tata"),
    ]
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn categories_start_with_all() {
    let products = construction_catalog();
    let categories = build_categories(&products);
    assert_eq!(categories[0], ALL_CATEGORIES);

    assert_eq!(build_categories(&[])[0], ALL_CATEGORIES);
}

#[test]
fn categories_have_no_duplicates() {
    let products = construction_catalog();
    let categories = build_categories(&products);

    let mut deduped = categories.clone();
    deduped.dedup();
    assert_eq!(categories, deduped);
    assert_eq!(categories, ["All", "Steel", "Cement"]);
}

#[test]
fn every_derived_category_is_inhabited() {
    let products = construction_catalog();

    for category in build_categories(&products) {
        if category == ALL_CATEGORIES {
            continue;
        }
        assert!(
            products
                .iter()
                .any(|p| p.category.as_deref() == Some(category.as_str())),
            "category {category} has no products"
        );
    }
}

#[test]
fn unconstrained_filter_is_identity() {
    let products = construction_catalog();
    let filtered = filter_products(products.clone(), &FilterState::new()).unwrap();
    assert_eq!(filtered, products);
}

#[test]
fn category_selection_only_keeps_that_category() {
    let products = construction_catalog();

    for category in build_categories(&products) {
        let state = FilterState::with(category.clone(), "");
        let filtered = filter_products(products.clone(), &state).unwrap();
        for product in &filtered {
            assert!(
                category == ALL_CATEGORIES
                    || product.category.as_deref() == Some(category.as_str())
            );
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let products = construction_catalog();
    let state = FilterState::with("All", "steel");

    let once = filter_products(products, &state).unwrap();
    let twice = filter_products(once.clone(), &state).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn query_matching_is_case_insensitive() {
    let products = construction_catalog();

    let lower = filter_products(products.clone(), &FilterState::with("All", "steel")).unwrap();
    let upper = filter_products(products, &FilterState::with("All", "STEEL")).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn whitespace_query_equals_empty_query() {
    let products = construction_catalog();

    let blank = filter_products(products.clone(), &FilterState::with("All", "   ")).unwrap();
    let empty = filter_products(products, &FilterState::with("All", "")).unwrap();
    assert_eq!(blank, empty);
}

#[test]
fn catalog_scenario() {
    // End-to-end walk of the catalog screen behavior
    let products = construction_catalog();

    assert_eq!(build_categories(&products), ["All", "Steel", "Cement"]);

    // "steel": item 1 via category, item 3 via name and category
    let filtered =
        filter_products(products.clone(), &FilterState::with("All", "steel")).unwrap();
    assert_eq!(ids(&filtered), ["1", "3"]);

    let filtered = filter_products(products.clone(), &FilterState::with("Cement", "")).unwrap();
    assert_eq!(ids(&filtered), ["2"]);

    let filtered = filter_products(products, &FilterState::with("Steel", "jsw")).unwrap();
    assert_eq!(ids(&filtered), ["1"]);
}

#[test]
fn filter_preserves_input_order() {
    // Reverse the catalog; the filter must follow the new order, never sort
    let mut products = construction_catalog();
    products.reverse();

    let filtered = filter_products(products, &FilterState::with("Steel", "")).unwrap();
    assert_eq!(ids(&filtered), ["3", "1"]);
}

#[test]
fn absent_fields_are_tolerated_end_to_end() {
    let products = vec![
        Product::new("a"),
        Product::new("b").with_name("Unlabeled Aggregate"),
        Product::new("c").with_category("Aggregate"),
    ];

    assert_eq!(build_categories(&products), ["All", "Aggregate"]);

    let filtered =
        filter_products(products.clone(), &FilterState::with("All", "aggregate")).unwrap();
    assert_eq!(ids(&filtered), ["b", "c"]);

    let filtered = filter_products(products, &FilterState::with("Aggregate", "")).unwrap();
    assert_eq!(ids(&filtered), ["c"]);
}
