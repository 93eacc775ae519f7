//! # Seed Data Generator
//!
//! Creates (if needed) a database file and fills it with the sample
//! customers, products and orders.
//!
//! ## Usage
//! ```bash
//! # Seed ./ecommerce.db
//! cargo run -p ecom-db --bin seed
//!
//! # Specify database path
//! cargo run -p ecom-db --bin seed -- --db ./data/shop.db
//! ```

use std::env;

use ecom_db::{seed_sample_data, Database, DbConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./ecommerce.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if let Some(path) = args.get(i + 1) {
                    db_path = path.clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Ecom Sales Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./ecommerce.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {other}");
            }
        }
        i += 1;
    }

    println!("Database: {db_path}");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let summary = seed_sample_data(&db).await?;

    if summary.is_empty() {
        println!("Database already has data, nothing to do.");
        println!("Delete the database file to regenerate.");
    } else {
        println!(
            "Seeded {} customers, {} products, {} orders ({} order lines)",
            summary.customers, summary.products, summary.orders, summary.order_lines
        );
        for product in db.products().list().await? {
            println!("  {:<12} {}", product.name, product.price());
        }
    }

    db.close().await;
    Ok(())
}
