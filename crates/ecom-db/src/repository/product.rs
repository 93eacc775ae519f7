//! # Product Repository
//!
//! Database operations for the product catalogue.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::generate_id;
use ecom_core::validation::{validate_price_cents, validate_product_name};
use ecom_core::{Money, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let laptop = db.products().create("Laptop", Money::from_major_minor(1200, 0)).await?;
/// let catalogue = db.products().list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Creates a product with a generated ID.
    pub async fn create(&self, name: &str, price: Money) -> DbResult<Product> {
        let product = Product {
            id: generate_id(),
            name: name.trim().to_string(),
            price_cents: price.cents(),
        };

        self.insert(&product).await
    }

    /// Inserts a product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product
    /// * `Err(DbError::Validation)` - Empty name or negative price
    pub async fn insert(&self, product: &Product) -> DbResult<Product> {
        validate_product_name(&product.name)?;
        validate_price_cents(product.price_cents)?;

        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .execute(&self.pool)
        .await?;

        Ok(product.clone())
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists all products sorted by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents
            FROM products
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
