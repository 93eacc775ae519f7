//! # ecom-db: Database Layer for Ecom Sales
//!
//! This crate provides database access for the sales store.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ecom Sales Data Flow                             │
//! │                                                                         │
//! │  sales-report / seed                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     ecom-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ customer.rs   │    │  (embedded)  │  │   │
//! │  │   │               │◄───│ product.rs    │    │ 001_initial  │  │   │
//! │  │   │ SqlitePool    │    │ order.rs      │    │  _schema.sql │  │   │
//! │  │   │               │    │ sales.rs      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (./ecommerce.db by default)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Store handle creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//! - [`seed`] - Sample data
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ecom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("ecommerce.db")).await?;
//! ecom_db::seed::seed_sample_data(&db).await?;
//!
//! let totals = db.sales().totals().await?;
//! if let Some(best) = totals.best_seller() {
//!     println!("{} ({} units)", best.name, best.units);
//! }
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use seed::{seed_sample_data, SeedSummary};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
pub use repository::sales::SalesRepository;
