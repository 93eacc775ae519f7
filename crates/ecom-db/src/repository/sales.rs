//! # Sales Repository
//!
//! Read-only queries feeding the sales aggregator in ecom-core.
//!
//! The store only returns raw `(product name, quantity)` rows; summing,
//! null handling and the best-seller tie-break all live in
//! [`SalesTotals`](ecom_core::SalesTotals) so they are identical for every
//! caller and testable without a database.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use ecom_core::{ProductQuantity, SalesTotals};

/// Repository for sales reporting queries.
#[derive(Debug, Clone)]
pub struct SalesRepository {
    pool: SqlitePool,
}

impl SalesRepository {
    /// Creates a new SalesRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SalesRepository { pool }
    }

    /// Returns one row per order/product association with the product's
    /// name and the association's quantity (possibly NULL).
    pub async fn product_quantities(&self) -> DbResult<Vec<ProductQuantity>> {
        let rows = sqlx::query_as::<_, ProductQuantity>(
            r#"
            SELECT
                p.name AS product_name,
                op.quantity
            FROM products p
            INNER JOIN order_products op ON op.product_id = p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Loaded sales rows");
        Ok(rows)
    }

    /// Loads every association and aggregates quantities per product name.
    pub async fn totals(&self) -> DbResult<SalesTotals> {
        let rows = self.product_quantities().await?;
        let totals = SalesTotals::from_rows(rows.into_iter().map(<(String, Option<i64>)>::from))?;

        debug!(products = totals.len(), units = totals.total_units(), "Aggregated sales");
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::test_support;

    #[tokio::test]
    async fn test_totals_sum_across_orders() {
        let db = test_support::db().await;
        let customer = test_support::customer(&db, "csmith@example.com").await;
        let a = test_support::product(&db, "A", 100).await;
        let b = test_support::product(&db, "B", 100).await;

        let first = test_support::order(&db, &customer).await;
        let second = test_support::order(&db, &customer).await;
        db.orders().add_product(&first.id, &a.id, Some(2)).await.unwrap();
        db.orders().add_product(&first.id, &b.id, Some(1)).await.unwrap();
        db.orders().add_product(&second.id, &a.id, Some(3)).await.unwrap();

        let totals = db.sales().totals().await.unwrap();
        assert_eq!(totals.get("A"), Some(5));
        assert_eq!(totals.get("B"), Some(1));
        assert_eq!(totals.len(), 2);

        let best = totals.best_seller().unwrap();
        assert_eq!(best.name, "A");
        assert_eq!(best.units, 5);
    }

    #[tokio::test]
    async fn test_empty_store_has_no_best_seller() {
        let db = test_support::db().await;
        test_support::product(&db, "Unsold", 100).await;

        let totals = db.sales().totals().await.unwrap();
        assert!(totals.is_empty());
        assert!(totals.best_seller().is_none());
        assert!(totals.distribution().is_empty());
    }

    #[tokio::test]
    async fn test_null_quantity_counts_as_zero() {
        let db = test_support::db().await;
        let customer = test_support::customer(&db, "jbrown@example.com").await;
        let a = test_support::product(&db, "A", 100).await;
        let b = test_support::product(&db, "B", 100).await;
        let first = test_support::order(&db, &customer).await;
        let second = test_support::order(&db, &customer).await;

        db.orders().add_product(&first.id, &a.id, Some(2)).await.unwrap();
        for (order_id, product_id) in [(&second.id, &a.id), (&first.id, &b.id)] {
            sqlx::query(
                "INSERT INTO order_products (order_id, product_id, quantity) VALUES (?1, ?2, NULL)",
            )
            .bind(order_id)
            .bind(product_id)
            .execute(db.pool())
            .await
            .unwrap();
        }

        let rows = db.sales().product_quantities().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().filter(|r| r.quantity.is_none()).count(), 2);

        let totals = db.sales().totals().await.unwrap();
        assert_eq!(totals.get("A"), Some(2));
        assert_eq!(totals.get("B"), None);
    }
}
