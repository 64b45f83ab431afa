use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::StoreError;
use crate::models::employee::Employee;

pub mod employee_store;

pub use employee_store::PgEmployeeStore;

/// Document store holding employee records, keyed (and partitioned) by id.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Adds a new record. An existing id is an error.
    async fn insert(&self, employee: &Employee) -> Result<(), StoreError>;

    async fn read_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError>;

    /// Replaces the whole record, creating it if absent.
    async fn upsert(&self, employee: &Employee) -> Result<(), StoreError>;
}

pub async fn create_pool(config: &AppConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            birthday_in_epoch TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
