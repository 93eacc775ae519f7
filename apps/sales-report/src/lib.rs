//! # Ecom Sales Report
//!
//! Opens the store, seeds the sample data, and prints the best-selling
//! product followed by the sales distribution chart.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Report Run                                       │
//! │                                                                         │
//! │  ReportConfig::load() ──► Database::new() (create file, migrate)       │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                      seed_sample_data() (if ECOM_SEED)                  │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                      db.sales().totals()                                │
//! │                                │                                        │
//! │                   ┌────────────┴────────────┐                           │
//! │                   ▼                         ▼                           │
//! │             best seller line        distribution chart                  │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                          db.close()                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `ECOM_DB_PATH` - SQLite file (default: ./ecommerce.db)
//! - `ECOM_SEED` - Insert sample data first (default: true)
//! - `ECOM_REPORT_FORMAT` - `text` or `json` (default: text)
//! - `ECOM_CHART_WIDTH` - Bar width for 100% (default: 40)

pub mod config;
pub mod error;
pub mod report;

use std::io::Write;

use ecom_db::{seed_sample_data, Database, DbConfig};
use tracing::info;

pub use config::{ConfigError, ReportConfig, ReportFormat};
pub use error::ReportError;
pub use report::SalesReport;

/// Runs the whole report against the configured store, writing to `out`.
///
/// The store is closed before returning, whether the report succeeded or not.
pub async fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<SalesReport, ReportError> {
    let db = Database::new(DbConfig::new(&config.database_path)).await?;

    let result = report(&db, config, out).await;

    db.close().await;
    result
}

async fn report<W: Write>(
    db: &Database,
    config: &ReportConfig,
    out: &mut W,
) -> Result<SalesReport, ReportError> {
    if config.seed {
        seed_sample_data(db).await?;
    }

    let totals = db.sales().totals().await?;
    let sales_report = SalesReport::from_totals(&totals);

    match &sales_report.best_seller {
        Some(best) => info!(name = %best.name, units = best.units, "Best seller computed"),
        None => info!("No purchases recorded"),
    }

    match config.format {
        ReportFormat::Text => report::write_text(out, &sales_report, config.chart_width)?,
        ReportFormat::Json => report::write_json(out, &sales_report)?,
    }
    out.flush()?;

    Ok(sales_report)
}
