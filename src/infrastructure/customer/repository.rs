use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::customer::Customer;
use crate::domain::RepositoryInterface;
use crate::error::RepositoryError;

use super::model::CustomerModel;

const SELECT_CUSTOMER: &str = "SELECT id, name, street, number, zipcode, city, active, reward_points
     FROM customers";

// ============================================================================
// Customer Repository - single-row aggregate
// ============================================================================

#[derive(Clone, Debug)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RepositoryInterface<Customer> for CustomerRepository {
    async fn create(&self, entity: &Customer) -> Result<(), RepositoryError> {
        let model = CustomerModel::from(entity);

        sqlx::query(
            "INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&model.id)
        .bind(&model.name)
        .bind(&model.street)
        .bind(model.number)
        .bind(&model.zipcode)
        .bind(&model.city)
        .bind(model.active)
        .bind(model.reward_points)
        .execute(&self.pool)
        .await?;

        tracing::info!(customer_id = %model.id, "Created customer");
        Ok(())
    }

    async fn update(&self, entity: &Customer) -> Result<(), RepositoryError> {
        let model = CustomerModel::from(entity);

        let result = sqlx::query(
            "UPDATE customers
             SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
             WHERE id = ?",
        )
        .bind(&model.name)
        .bind(&model.street)
        .bind(model.number)
        .bind(&model.zipcode)
        .bind(&model.city)
        .bind(model.active)
        .bind(model.reward_points)
        .bind(&model.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(customer_id = %model.id, "Update of unknown customer");
            return Err(RepositoryError::not_found("Customer", model.id));
        }

        tracing::info!(customer_id = %model.id, "Updated customer");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer, RepositoryError> {
        let model = sqlx::query_as::<_, CustomerModel>(&format!("{SELECT_CUSTOMER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Customer", id))?;

        tracing::debug!(customer_id = %id, "Loaded customer");
        Customer::try_from(model)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let models = sqlx::query_as::<_, CustomerModel>(&format!("{SELECT_CUSTOMER} ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = models.len(), "Loaded customers");
        models.into_iter().map(Customer::try_from).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
