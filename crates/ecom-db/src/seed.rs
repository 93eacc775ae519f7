//! # Sample Data
//!
//! Fixed demonstration catalogue: three customers, six products and six
//! orders. Every order line is written without an explicit quantity, so each
//! counts as one unit.
//!
//! ## Expected Sales
//! ```text
//! Keyboard    4   ← best seller
//! Headphones  3
//! Laptop      2
//! Smartphone  2
//! Monitor     1
//! Printer     1
//! ```

use tracing::{info, warn};

use crate::error::DbResult;
use crate::pool::Database;
use ecom_core::Money;

/// Customers as `(name, email)`.
pub const CUSTOMERS: &[(&str, &str)] = &[
    ("Claire Smith", "csmith@example.com"),
    ("John Brown", "jbrown@example.com"),
    ("Olivia Pearson", "opearson@example.com"),
];

/// Products as `(name, whole-dollar price)`.
pub const PRODUCTS: &[(&str, i64)] = &[
    ("Laptop", 1200),
    ("Smartphone", 800),
    ("Headphones", 150),
    ("Monitor", 300),
    ("Keyboard", 50),
    ("Printer", 200),
];

/// Orders as `(index into CUSTOMERS, indexes into PRODUCTS)`.
pub const ORDERS: &[(usize, &[usize])] = &[
    (0, &[0, 2]),
    (0, &[1, 4]),
    (1, &[3]),
    (2, &[1, 2, 4]),
    (1, &[4, 5]),
    (2, &[0, 2, 4]),
];

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub order_lines: usize,
}

impl SeedSummary {
    /// True when the run was skipped because data already existed.
    pub fn is_empty(&self) -> bool {
        *self == SeedSummary::default()
    }
}

/// Inserts the sample data.
///
/// Skips (returning an empty summary) if the store already has customers, so
/// running against an existing file never trips the unique email constraint.
/// Any constraint violation while inserting aborts with the error.
pub async fn seed_sample_data(db: &Database) -> DbResult<SeedSummary> {
    let existing = db.customers().count().await?;
    if existing > 0 {
        warn!(existing, "Store already has customers, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut summary = SeedSummary::default();

    let mut customers = Vec::with_capacity(CUSTOMERS.len());
    for (name, email) in CUSTOMERS {
        customers.push(db.customers().create(name, email, None).await?);
        summary.customers += 1;
    }

    let mut products = Vec::with_capacity(PRODUCTS.len());
    for (name, dollars) in PRODUCTS {
        products.push(db.products().create(name, Money::from_major_minor(*dollars, 0)).await?);
        summary.products += 1;
    }

    for (customer_idx, product_idxs) in ORDERS {
        let customer = &customers[*customer_idx];
        let order = db.orders().create(&customer.id).await?;
        summary.orders += 1;

        for product_idx in product_idxs.iter() {
            let product = &products[*product_idx];
            db.orders().add_product(&order.id, &product.id, None).await?;
            summary.order_lines += 1;
        }
    }

    info!(
        customers = summary.customers,
        products = summary.products,
        orders = summary.orders,
        order_lines = summary.order_lines,
        "Sample data seeded"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    #[tokio::test]
    async fn test_seed_counts() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let summary = seed_sample_data(&db).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                customers: 3,
                products: 6,
                orders: 6,
                order_lines: 13,
            }
        );

        assert_eq!(db.customers().count().await.unwrap(), 3);
        assert_eq!(db.products().count().await.unwrap(), 6);
        assert_eq!(db.orders().count().await.unwrap(), 6);
        assert_eq!(db.orders().count_lines().await.unwrap(), 13);
    }

    #[tokio::test]
    async fn test_seeded_sales() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_sample_data(&db).await.unwrap();

        let totals = db.sales().totals().await.unwrap();
        assert_eq!(totals.get("Keyboard"), Some(4));
        assert_eq!(totals.get("Headphones"), Some(3));
        assert_eq!(totals.get("Laptop"), Some(2));
        assert_eq!(totals.get("Smartphone"), Some(2));
        assert_eq!(totals.get("Monitor"), Some(1));
        assert_eq!(totals.get("Printer"), Some(1));

        let best = totals.best_seller().unwrap();
        assert_eq!(best.name, "Keyboard");
        assert_eq!(best.units, 4);

        let shares = totals.distribution();
        assert_eq!(shares[0].name, "Keyboard");
        assert_eq!(shares[0].percent_label(), "30.8%");
    }

    #[tokio::test]
    async fn test_second_seed_is_skipped() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(!seed_sample_data(&db).await.unwrap().is_empty());
        assert!(seed_sample_data(&db).await.unwrap().is_empty());
        assert_eq!(db.customers().count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_orders_belong_to_seeded_customers() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_sample_data(&db).await.unwrap();

        let claire = db
            .customers()
            .get_by_email("csmith@example.com")
            .await
            .unwrap()
            .unwrap();
        let orders = db.orders().list_for_customer(&claire.id).await.unwrap();
        assert_eq!(orders.len(), 2);

        let mut names = Vec::new();
        for order in &orders {
            for line in db.orders().lines(&order.id).await.unwrap() {
                names.push(line.product_name);
            }
        }
        names.sort();
        assert_eq!(names, ["Headphones", "Keyboard", "Laptop", "Smartphone"]);
    }
}
