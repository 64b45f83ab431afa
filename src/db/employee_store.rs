use async_trait::async_trait;
use sqlx::PgPool;

use super::EmployeeStore;
use crate::errors::StoreError;
use crate::models::employee::Employee;

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, employee: &Employee) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO employees (id, first_name, last_name, birthday_in_epoch, email) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.birthday_in_epoch)
        .bind(&employee.email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn read_by_id(&self, id: &str) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, birthday_in_epoch, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn upsert(&self, employee: &Employee) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, first_name, last_name, birthday_in_epoch, email)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                birthday_in_epoch = EXCLUDED.birthday_in_epoch,
                email = EXCLUDED.email
            "#,
        )
        .bind(&employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.birthday_in_epoch)
        .bind(&employee.email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
