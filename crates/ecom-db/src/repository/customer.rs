//! # Customer Repository
//!
//! Database operations for customers. Email addresses are unique; a second
//! customer with the same email fails with [`DbError::UniqueViolation`].

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::generate_id;
use ecom_core::validation::{validate_customer_name, validate_email, validate_shipping_address};
use ecom_core::Customer;

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Creates a customer with a generated ID and the current timestamp.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        shipping_address: Option<&str>,
    ) -> DbResult<Customer> {
        let customer = Customer {
            id: generate_id(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            shipping_address: shipping_address.map(|a| a.trim().to_string()),
            created_at: Utc::now(),
        };

        self.insert(&customer).await
    }

    /// Inserts a customer.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Inserted customer
    /// * `Err(DbError::Validation)` - Name, email or address rejected
    /// * `Err(DbError::UniqueViolation)` - Email already exists
    pub async fn insert(&self, customer: &Customer) -> DbResult<Customer> {
        validate_customer_name(&customer.name)?;
        validate_email(&customer.email)?;
        validate_shipping_address(customer.shipping_address.as_deref())?;

        debug!(id = %customer.id, email = %customer.email, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, shipping_address, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.shipping_address)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_duplicate_value(&customer.email))?;

        Ok(customer.clone())
    }

    /// Gets a customer by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, shipping_address, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Gets a customer by email.
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, shipping_address, created_at
            FROM customers
            WHERE email = ?1
            "#,
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Counts customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
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
    async fn test_create_and_fetch() {
        let db = test_support::db().await;
        let repo = db.customers();

        let created = repo
            .create("Claire Smith", "csmith@example.com", Some("1 Main St"))
            .await
            .unwrap();

        let by_id = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id, created);

        let by_email = repo.get_by_email("csmith@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_email.shipping_address.as_deref(), Some("1 Main St"));

        assert!(repo.get_by_email("nobody@example.com").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let db = test_support::db().await;
        let repo = db.customers();

        repo.create("Claire Smith", "csmith@example.com", None).await.unwrap();
        let err = repo
            .create("Claire Again", "csmith@example.com", None)
            .await
            .unwrap_err();

        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "customers.email");
                assert_eq!(value, "csmith@example.com");
            }
            other => panic!("expected UniqueViolation, got {other:?}"),
        }
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_the_store() {
        let db = test_support::db().await;
        let repo = db.customers();

        assert!(matches!(
            repo.create("", "a@example.com", None).await,
            Err(DbError::Validation(_))
        ));
        assert!(matches!(
            repo.create("Someone", "not-an-email", None).await,
            Err(DbError::Validation(_))
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
