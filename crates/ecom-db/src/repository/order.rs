//! # Order Repository
//!
//! Database operations for orders and their product lines.
//!
//! ## Order Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE ORDER                                                       │
//! │     └── create(customer_id) → Order   (customer must exist)            │
//! │                                                                         │
//! │  2. LINK PRODUCTS                                                      │
//! │     └── add_product(order_id, product_id, None)    → quantity 1        │
//! │     └── add_product(order_id, product_id, Some(3)) → quantity 3        │
//! │                                                                         │
//! │  3. READ BACK                                                          │
//! │     └── lines(order_id) → orders ⋈ order_products ⋈ products           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::generate_id;
use ecom_core::validation::{validate_quantity, validate_uuid};
use ecom_core::{Order, OrderLine, OrderProduct, DEFAULT_LINE_QUANTITY};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Creates an order for a customer, dated now.
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - Customer doesn't exist
    pub async fn create(&self, customer_id: &str) -> DbResult<Order> {
        let order = Order {
            id: generate_id(),
            customer_id: customer_id.to_string(),
            order_date: Utc::now(),
        };

        self.insert(&order).await
    }

    /// Inserts an order.
    pub async fn insert(&self, order: &Order) -> DbResult<Order> {
        validate_uuid(&order.customer_id)?;

        debug!(id = %order.id, customer_id = %order.customer_id, "Inserting order");

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, order_date)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&order.id)
        .bind(&order.customer_id)
        .bind(order.order_date)
        .execute(&self.pool)
        .await?;

        Ok(order.clone())
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Lists a customer's orders, oldest first.
    pub async fn list_for_customer(&self, customer_id: &str) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_id, order_date
            FROM orders
            WHERE customer_id = ?1
            ORDER BY order_date, id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Links a product to an order.
    ///
    /// `quantity = None` stores [`DEFAULT_LINE_QUANTITY`] (1).
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - Order or product doesn't exist
    /// * `Err(DbError::UniqueViolation)` - Product already on this order
    /// * `Err(DbError::Validation)` - Quantity out of range
    pub async fn add_product(
        &self,
        order_id: &str,
        product_id: &str,
        quantity: Option<i64>,
    ) -> DbResult<OrderProduct> {
        let quantity = quantity.unwrap_or(DEFAULT_LINE_QUANTITY);
        validate_quantity(quantity)?;

        debug!(
            order_id = %order_id,
            product_id = %product_id,
            quantity,
            "Adding product to order"
        );

        sqlx::query(
            r#"
            INSERT INTO order_products (order_id, product_id, quantity)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_duplicate_value(format!("{order_id}/{product_id}")))?;

        Ok(OrderProduct {
            order_id: order_id.to_string(),
            product_id: product_id.to_string(),
            quantity: Some(quantity),
        })
    }

    /// Lists an order's lines joined with their products, by product name.
    pub async fn lines(&self, order_id: &str) -> DbResult<Vec<OrderLine>> {
        let lines = sqlx::query_as::<_, OrderLine>(
            r#"
            SELECT
                op.order_id,
                op.product_id,
                p.name AS product_name,
                p.price_cents AS unit_price_cents,
                op.quantity
            FROM order_products op
            INNER JOIN products p ON p.id = op.product_id
            WHERE op.order_id = ?1
            ORDER BY p.name, p.id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Counts orders.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts order/product rows across all orders.
    pub async fn count_lines(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;

    #[tokio::test]
    async fn test_order_lines_round_trip() {
        let db = test_support::db().await;
        let customer = test_support::customer(&db, "csmith@example.com").await;
        let laptop = test_support::product(&db, "Laptop", 120_000).await;
        let headphones = test_support::product(&db, "Headphones", 15_000).await;

        let order = test_support::order(&db, &customer).await;
        let repo = db.orders();

        let link = repo.add_product(&order.id, &laptop.id, None).await.unwrap();
        assert_eq!(link.quantity, Some(1));
        repo.add_product(&order.id, &headphones.id, Some(2)).await.unwrap();

        let lines = repo.lines(&order.id).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_name, "Headphones");
        assert_eq!(lines[0].quantity, Some(2));
        assert_eq!(lines[0].line_total().cents(), 30_000);
        assert_eq!(lines[1].product_name, "Laptop");
        assert_eq!(lines[1].quantity, Some(1));

        assert_eq!(repo.get_by_id(&order.id).await.unwrap().unwrap(), order);
        assert_eq!(repo.count_lines().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_for_customer() {
        let db = test_support::db().await;
        let claire = test_support::customer(&db, "csmith@example.com").await;
        let john = test_support::customer(&db, "jbrown@example.com").await;

        let first = test_support::order(&db, &claire).await;
        let second = test_support::order(&db, &claire).await;
        test_support::order(&db, &john).await;

        let ids: Vec<String> = db
            .orders()
            .list_for_customer(&claire.id)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first.id));
        assert!(ids.contains(&second.id));
        assert_eq!(db.orders().count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_order_requires_existing_customer() {
        let db = test_support::db().await;

        let err = db.orders().create(&generate_id()).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_line_requires_existing_product_and_order() {
        let db = test_support::db().await;
        let customer = test_support::customer(&db, "opearson@example.com").await;
        let order = test_support::order(&db, &customer).await;
        let monitor = test_support::product(&db, "Monitor", 30_000).await;

        let err = db
            .orders()
            .add_product(&order.id, &generate_id(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        let err = db
            .orders()
            .add_product(&generate_id(), &monitor.id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        assert_eq!(db.orders().count_lines().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_line_is_rejected() {
        let db = test_support::db().await;
        let customer = test_support::customer(&db, "jbrown@example.com").await;
        let order = test_support::order(&db, &customer).await;
        let keyboard = test_support::product(&db, "Keyboard", 5_000).await;

        db.orders().add_product(&order.id, &keyboard.id, None).await.unwrap();
        let err = db
            .orders()
            .add_product(&order.id, &keyboard.id, Some(2))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_negative_quantity_is_rejected() {
        let db = test_support::db().await;
        let customer = test_support::customer(&db, "jbrown@example.com").await;
        let order = test_support::order(&db, &customer).await;
        let keyboard = test_support::product(&db, "Keyboard", 5_000).await;

        let err = db
            .orders()
            .add_product(&order.id, &keyboard.id, Some(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));

        // The schema enforces the same rule for writers that bypass the repository.
        let err = sqlx::query(
            "INSERT INTO order_products (order_id, product_id, quantity) VALUES (?1, ?2, -1)",
        )
        .bind(&order.id)
        .bind(&keyboard.id)
        .execute(db.pool())
        .await
        .map_err(DbError::from)
        .unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));
    }

    #[tokio::test]
    async fn test_schema_defaults_quantity_to_one() {
        let db = test_support::db().await;
        let customer = test_support::customer(&db, "csmith@example.com").await;
        let order = test_support::order(&db, &customer).await;
        let printer = test_support::product(&db, "Printer", 20_000).await;

        sqlx::query("INSERT INTO order_products (order_id, product_id) VALUES (?1, ?2)")
            .bind(&order.id)
            .bind(&printer.id)
            .execute(db.pool())
            .await
            .unwrap();

        let lines = db.orders().lines(&order.id).await.unwrap();
        assert_eq!(lines[0].quantity, Some(DEFAULT_LINE_QUANTITY));
    }
}
