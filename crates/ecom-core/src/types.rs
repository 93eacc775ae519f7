//! # Domain Types
//!
//! Row types shared by the store and the report.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Order      │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │◄──│  customer_id    │   │  id (UUID)      │       │
//! │  │  name           │   │  id (UUID)      │   │  name           │       │
//! │  │  email (unique) │   │  order_date     │   │  price_cents    │       │
//! │  └─────────────────┘   └────────▲────────┘   └────────▲────────┘       │
//! │                                 │                     │                 │
//! │                        ┌────────┴─────────────────────┴──┐              │
//! │                        │          OrderProduct           │              │
//! │                        │  order_id + product_id (key)    │              │
//! │                        │  quantity (default 1)           │              │
//! │                        └─────────────────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Relations are plain foreign-key fields. Navigation happens through explicit
//! join queries in ecom-db, never through back-references on these structs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer who places orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address, unique across customers.
    pub email: String,

    /// Shipping address, if known.
    pub shipping_address: Option<String>,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name. Sales are reported per name.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by exactly one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: String,
    /// Owning customer (required).
    pub customer_id: String,
    pub order_date: DateTime<Utc>,
}

// =============================================================================
// Order <-> Product association
// =============================================================================

/// One row of the order/product association.
///
/// Has no identity of its own: `(order_id, product_id)` is the key.
/// `quantity` is `None` only for rows written without a value by some other
/// writer; such rows count as zero units in sales totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderProduct {
    pub order_id: String,
    pub product_id: String,
    pub quantity: Option<i64>,
}

/// An association row joined with its product, as listed for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub order_id: String,
    pub product_id: String,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: Option<i64>,
}

impl OrderLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns unit price × quantity. A missing quantity counts as zero.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity.unwrap_or(0))
    }
}

/// Input row of the sales aggregation: a product name and the quantity of
/// one association referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductQuantity {
    pub product_name: String,
    pub quantity: Option<i64>,
}

impl From<ProductQuantity> for (String, Option<i64>) {
    fn from(row: ProductQuantity) -> Self {
        (row.product_name, row.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price() {
        let product = Product {
            id: "p1".to_string(),
            name: "Monitor".to_string(),
            price_cents: 30_000,
        };
        assert_eq!(product.price().to_string(), "$300.00");
    }

    #[test]
    fn test_line_total_treats_missing_quantity_as_zero() {
        let mut line = OrderLine {
            order_id: "o1".to_string(),
            product_id: "p1".to_string(),
            product_name: "Headphones".to_string(),
            unit_price_cents: 15_000,
            quantity: Some(2),
        };
        assert_eq!(line.line_total().cents(), 30_000);

        line.quantity = None;
        assert!(line.line_total().is_zero());
    }

    #[test]
    fn test_product_quantity_into_tuple() {
        let row = ProductQuantity {
            product_name: "Printer".to_string(),
            quantity: Some(1),
        };
        let (name, qty): (String, Option<i64>) = row.into();
        assert_eq!(name, "Printer");
        assert_eq!(qty, Some(1));
    }
}
