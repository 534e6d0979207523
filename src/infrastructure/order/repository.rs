use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::order::Order;
use crate::domain::RepositoryInterface;
use crate::error::RepositoryError;

use super::model::{OrderItemModel, OrderModel};

// ============================================================================
// Order Repository - aggregate root with owned item rows
// ============================================================================
//
// Writes touch two tables, so each write runs in one transaction:
// 1. Parent row (orders) first, so item foreign keys resolve
// 2. Child rows (order_items) in item order
// 3. Commit; any error drops the transaction, which rolls it back
//
// ============================================================================

#[derive(Clone, Debug)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn insert_items(
    conn: &mut SqliteConnection,
    items: &[OrderItemModel],
) -> Result<(), RepositoryError> {
    for item in items {
        sqlx::query(
            "INSERT INTO order_items (id, product_id, order_id, quantity, name, price)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.id)
        .bind(&item.product_id)
        .bind(&item.order_id)
        .bind(item.quantity)
        .bind(&item.name)
        .bind(item.price)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

#[async_trait]
impl RepositoryInterface<Order> for OrderRepository {
    async fn create(&self, entity: &Order) -> Result<(), RepositoryError> {
        let model = OrderModel::from(entity);
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(&model.id)
            .bind(&model.customer_id)
            .bind(model.total)
            .execute(&mut *tx)
            .await?;

        insert_items(&mut tx, &model.items).await?;

        tx.commit().await?;

        tracing::info!(
            order_id = %model.id,
            customer_id = %model.customer_id,
            item_count = model.items.len(),
            total = model.total,
            "Created order"
        );
        Ok(())
    }

    /// Rewrites the order row and replaces every item row with `entity.items()`.
    async fn update(&self, entity: &Order) -> Result<(), RepositoryError> {
        let model = OrderModel::from(entity);
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(&model.customer_id)
            .bind(model.total)
            .bind(&model.id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(order_id = %model.id, "Update of unknown order");
            return Err(RepositoryError::not_found("Order", model.id));
        }

        let removed = sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(&model.id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        insert_items(&mut tx, &model.items).await?;

        tx.commit().await?;

        tracing::info!(
            order_id = %model.id,
            removed_items = removed,
            item_count = model.items.len(),
            total = model.total,
            "Updated order"
        );
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let model = OrderModel::find_with_items(&self.pool, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Order", id))?;

        tracing::debug!(order_id = %id, item_count = model.items.len(), "Loaded order");
        Order::try_from(model)
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let models = OrderModel::find_all_with_items(&self.pool).await?;

        tracing::debug!(count = models.len(), "Loaded orders");
        models.into_iter().map(Order::try_from).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
