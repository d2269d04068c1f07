//! Benchmarks for catalog filtering
//!
//! Run with: cargo bench --package filtering
//!
//! This benchmarks category derivation and the filter pipeline over a
//! synthetic catalog the size of a large supplier listing.

use catalog::Product;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filtering::{build_categories, filter_products, FilterState};

const CATEGORIES: [&str; 6] = ["Steel", "Cement", "Bricks", "Paint", "Plumbing", "Electrical"];
const SUPPLIERS: [&str; 5] = ["JSW", "ACC", "Tata", "UltraTech", "Asian Paints"];

fn synthetic_catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            Product::new(format!("p-{i}"))
                .with_name(format!("{} Item {}", CATEGORIES[i % CATEGORIES.len()], i))
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_supplier(SUPPLIERS[i % SUPPLIERS.len()])
                .with_price((i % 900) as f64 + 100.0)
                .with_stock((i % 50) as u32)
        })
        .collect()
}

fn bench_build_categories(c: &mut Criterion) {
    let products = synthetic_catalog(10_000);

    c.bench_function("build_categories_10k", |b| {
        b.iter(|| {
            let categories = build_categories(black_box(&products));
            black_box(categories)
        })
    });
}

fn bench_filter_by_category(c: &mut Criterion) {
    let products = synthetic_catalog(10_000);
    let state = FilterState::with("Steel", "");

    c.bench_function("filter_by_category_10k", |b| {
        b.iter(|| {
            let filtered = filter_products(black_box(products.clone()), black_box(&state));
            black_box(filtered)
        })
    });
}

fn bench_filter_by_query(c: &mut Criterion) {
    let products = synthetic_catalog(10_000);
    let state = FilterState::with("All", "tata");

    c.bench_function("filter_by_query_10k", |b| {
        b.iter(|| {
            let filtered = filter_products(black_box(products.clone()), black_box(&state));
            black_box(filtered)
        })
    });
}

fn bench_filter_combined(c: &mut Criterion) {
    let products = synthetic_catalog(10_000);
    let state = FilterState::with("Cement", "acc");

    c.bench_function("filter_combined_10k", |b| {
        b.iter(|| {
            let filtered = filter_products(black_box(products.clone()), black_box(&state));
            black_box(filtered)
        })
    });
}

criterion_group!(
    benches,
    bench_build_categories,
    bench_filter_by_category,
    bench_filter_by_query,
    bench_filter_combined
);
criterion_main!(benches);
