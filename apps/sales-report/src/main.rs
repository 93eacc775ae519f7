//! # Sales Report Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (environment, `.env`)
//! 2. Initialize tracing (logging to stderr, so stdout carries only the report)
//! 3. Run the report: open store, seed, best seller, distribution, close

use std::io;

use ecom_sales_report::{run, ReportConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::load()?;

    init_tracing();

    info!(
        path = %config.database_path.display(),
        seed = config.seed,
        format = ?config.format,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    run(&config, &mut stdout.lock()).await?;

    info!("Report complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: `info,ecom=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ecom=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
