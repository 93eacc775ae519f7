//! # Repository Module
//!
//! Database repository implementations for the sales store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Caller (seed, report)                                                 │
//! │       │                                                                 │
//! │       │  db.orders().add_product(&order.id, &product.id, None)         │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── create / insert / get_by_id                                       │
//! │  ├── add_product (association row)                                     │
//! │  └── lines (explicit join with products)                               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customers
//! - [`ProductRepository`](product::ProductRepository) - Product catalogue
//! - [`OrderRepository`](order::OrderRepository) - Orders and order/product rows
//! - [`SalesRepository`](sales::SalesRepository) - Sales aggregation reads

pub mod customer;
pub mod order;
pub mod product;
pub mod sales;

use uuid::Uuid;

/// Generates a new entity ID (UUID v4).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
