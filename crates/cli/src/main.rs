use anyhow::{anyhow, Context, Result};
use catalog::{Catalog, Product};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use filtering::{build_categories, filter_products, FilterState, ALL_CATEGORIES};
use sources::{JsonFileSource, SeedSource};
use std::path::PathBuf;
use std::time::Instant;

/// RitzYard - B2B procurement catalog browser
#[derive(Parser)]
#[command(name = "ritzyard")]
#[command(about = "Browse and filter the RitzYard product catalog", long_about = None)]
struct Cli {
    /// Path to a JSON catalog file (built-in seed catalog when omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// How browse results are laid out, mirroring the app's grid/list toggle
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    List,
    Grid,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with category and text filters
    Browse {
        /// Category to filter by ("All" for no constraint)
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Free-text query matched against name, category, and supplier
        #[arg(long, default_value = "")]
        query: String,

        /// Result layout
        #[arg(long, value_enum, default_value = "list")]
        layout: Layout,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List the derived category set
    Categories,

    /// Show one product by id
    Product {
        /// Product id to display
        #[arg(long)]
        id: String,
    },

    /// Show per-category catalog statistics
    Stats,

    /// Run a filtering benchmark over a synthetic catalog
    Benchmark {
        /// Number of synthetic products to generate
        #[arg(long, default_value = "10000")]
        products: usize,

        /// Number of filter passes to time
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Fetch the product collection, then everything below is synchronous
    let start = Instant::now();
    let products = match &cli.catalog {
        Some(path) => JsonFileSource::new(path)
            .fetch()
            .await
            .context("Failed to fetch catalog")?,
        None => SeedSource::new().fetch().await?,
    };
    let catalog = Catalog::from_products(products);
    tracing::debug!(elapsed = ?start.elapsed(), "catalog ready");

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            category,
            query,
            layout,
            json,
        } => handle_browse(&catalog, category, query, layout, json)?,
        Commands::Categories => handle_categories(&catalog),
        Commands::Product { id } => handle_product(&catalog, &id)?,
        Commands::Stats => handle_stats(&catalog),
        Commands::Benchmark {
            products,
            iterations,
        } => handle_benchmark(products, iterations)?,
    }

    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(
    catalog: &Catalog,
    category: String,
    query: String,
    layout: Layout,
    json: bool,
) -> Result<()> {
    let state = FilterState::with(category, query);
    let filtered = filter_products(catalog.products().to_vec(), &state)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} of {} products (category: {}, query: {:?})",
            filtered.len(),
            catalog.products().len(),
            state.selected_category(),
            state.trimmed_query()
        )
        .bold()
        .blue()
    );

    match layout {
        Layout::List => print_list(&filtered),
        Layout::Grid => print_grid(&filtered),
    }
    Ok(())
}

fn print_list(products: &[Product]) {
    for product in products {
        println!(
            "{} {} [{}] {} {}",
            "•".green(),
            product.name.as_deref().unwrap_or("(unnamed)").bold(),
            product.category.as_deref().unwrap_or("uncategorized"),
            product.supplier.as_deref().unwrap_or("-"),
            format_price(product.price).cyan(),
        );
    }
}

fn print_grid(products: &[Product]) {
    // Three tiles per row, like the app's grid view
    for row in products.chunks(3) {
        let tiles: Vec<String> = row
            .iter()
            .map(|p| {
                format!(
                    "{:<24}",
                    p.name.as_deref().unwrap_or("(unnamed)")
                )
            })
            .collect();
        println!("{}", tiles.join(" | "));

        let subtitles: Vec<String> = row
            .iter()
            .map(|p| {
                format!(
                    "{:<24}",
                    format!(
                        "{} · {}",
                        p.category.as_deref().unwrap_or("-"),
                        format_price(p.price)
                    )
                )
            })
            .collect();
        println!("{}", subtitles.join(" | ").dimmed());
        println!();
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("₹{p:.2}"),
        None => "price on request".to_string(),
    }
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    let categories = build_categories(catalog.products());

    println!("{}", "Categories:".bold().blue());
    for category in &categories {
        if category == ALL_CATEGORIES {
            println!("  {} {}", "•".green(), category);
        } else {
            let count = catalog.products_in_category(category).len();
            println!("  {} {} ({} products)", "•".green(), category, count);
        }
    }
}

/// Handle the 'product' command
fn handle_product(catalog: &Catalog, id: &str) -> Result<()> {
    let product = catalog
        .get_product(id)
        .ok_or_else(|| anyhow!("Product {} not found", id))?;

    println!("{}", format!("Product {}", product.id).bold().blue());
    println!(
        "  {}Name: {}",
        "• ".green(),
        product.name.as_deref().unwrap_or("(unnamed)")
    );
    println!(
        "  {}Category: {}",
        "• ".green(),
        product.category.as_deref().unwrap_or("uncategorized")
    );
    println!(
        "  {}Supplier: {}",
        "• ".green(),
        product.supplier.as_deref().unwrap_or("-")
    );
    println!("  {}Price: {}", "• ".cyan(), format_price(product.price));
    match product.stock {
        Some(stock) => println!("  {}Stock: {} units", "• ".cyan(), stock),
        None => println!("  {}Stock: unknown", "• ".cyan()),
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(catalog: &Catalog) {
    let categories = build_categories(catalog.products());

    println!("{}", "Catalog statistics:".bold().blue());
    for category in categories.iter().filter(|c| *c != ALL_CATEGORIES) {
        if let Some(stats) = catalog.category_stats(category) {
            let price_range = match (stats.min_price, stats.max_price) {
                (Some(min), Some(max)) => format!("₹{min:.2} - ₹{max:.2}"),
                _ => "no prices".to_string(),
            };
            println!(
                "  {} {}: {} products, {} in stock, {}",
                "•".green(),
                category.bold(),
                stats.product_count,
                stats.in_stock_count,
                price_range
            );
        }
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(product_count: usize, iterations: usize) -> Result<()> {
    const CATEGORIES: [&str; 6] = [
        "Steel",
        "Cement",
        "Bricks",
        "Paint",
        "Plumbing",
        "Electrical",
    ];
    const QUERIES: [&str; 4] = ["steel", "tata", "bag", "zzz-no-match"];

    // Generate a synthetic catalog
    let products: Vec<Product> = (0..product_count)
        .map(|i| {
            Product::new(format!("p-{i}"))
                .with_name(format!("{} Item {}", CATEGORIES[i % CATEGORIES.len()], i))
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_supplier(if i % 2 == 0 { "Tata" } else { "JSW" })
                .with_price(rand::random::<f64>() * 1000.0)
        })
        .collect();

    // Time filter passes with randomized states
    let mut timings = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let category = CATEGORIES[rand::random_range(0..CATEGORIES.len())];
        let query = QUERIES[rand::random_range(0..QUERIES.len())];
        let state = FilterState::with(category, query);

        let start = Instant::now();
        let filtered = filter_products(products.clone(), &state)?;
        timings.push(start.elapsed());
        std::hint::black_box(filtered);
    }

    // Calculate and display statistics
    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = iterations as f32 / total_time.as_secs_f32();

    println!("Benchmark results ({product_count} products):");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} filter passes/second", throughput);

    Ok(())
}
