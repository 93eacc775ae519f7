//! # ecom-core: Pure Business Logic for Ecom Sales
//!
//! This crate holds the domain model and the sales aggregation logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ecom Sales Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    sales-report (binary)                        │   │
//! │  │    seed ──► best seller ──► distribution chart                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ecom-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   sales   │  │ validation│  │   │
//! │  │   │ Customer  │  │   Money   │  │  Totals   │  │   rules   │  │   │
//! │  │   │  Order    │  │           │  │ BestSeller│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ecom-db (Database Layer)                     │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain rows (Customer, Product, Order, OrderProduct, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`sales`] - Sales aggregation, best seller and distribution
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use ecom_core::sales::SalesTotals;
//!
//! let totals = SalesTotals::from_rows([("A", Some(2)), ("B", Some(1)), ("A", Some(3))]).unwrap();
//! assert_eq!(totals.get("A"), Some(5));
//!
//! let best = totals.best_seller().unwrap();
//! assert_eq!(best.name, "A");
//! assert_eq!(best.units, 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod sales;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use sales::{BestSeller, SalesShare, SalesTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity stored on an order line when the caller does not give one.
pub const DEFAULT_LINE_QUANTITY: i64 = 1;

/// Upper bound for a single order line quantity.
///
/// Catches typos like 1000 instead of 10 before they reach the store.
pub const MAX_LINE_QUANTITY: i64 = 9_999;
