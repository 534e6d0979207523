use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::domain::order::{Order, OrderItem};
use crate::error::RepositoryError;

// ============================================================================
// Order Persistence Models
// ============================================================================
//
// `orders` holds one row per aggregate with a denormalized total;
// `order_items` holds one row per line, keyed back to its order. Rows are
// read in rowid order, which is insertion order.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderModel {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
    #[sqlx(skip)]
    pub items: Vec<OrderItemModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItemModel {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub order_id: String,
    pub product_id: String,
}

const SELECT_ORDER: &str = "SELECT id, customer_id, total FROM orders";
const SELECT_ITEM: &str =
    "SELECT id, name, price, quantity, order_id, product_id FROM order_items";

impl OrderModel {
    /// Order row plus its item rows, or None when no order has this id
    pub async fn find_with_items(
        pool: &SqlitePool,
        id: &str,
    ) -> Result<Option<Self>, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(&format!("{SELECT_ORDER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(mut order) = order else {
            return Ok(None);
        };

        order.items = sqlx::query_as::<_, OrderItemModel>(&format!(
            "{SELECT_ITEM} WHERE order_id = ? ORDER BY rowid"
        ))
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(order))
    }

    /// Every order row with its items, using one query per table
    pub async fn find_all_with_items(pool: &SqlitePool) -> Result<Vec<Self>, RepositoryError> {
        let mut orders = sqlx::query_as::<_, OrderModel>(&format!("{SELECT_ORDER} ORDER BY rowid"))
            .fetch_all(pool)
            .await?;

        let items = sqlx::query_as::<_, OrderItemModel>(&format!("{SELECT_ITEM} ORDER BY rowid"))
            .fetch_all(pool)
            .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItemModel>> = HashMap::new();
        for item in items {
            items_by_order
                .entry(item.order_id.clone())
                .or_default()
                .push(item);
        }

        for order in &mut orders {
            order.items = items_by_order.remove(&order.id).unwrap_or_default();
        }

        Ok(orders)
    }
}

impl From<&Order> for OrderModel {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            total: order.total(),
            items: order
                .items()
                .iter()
                .map(|item| OrderItemModel::from_item(order.id(), item))
                .collect(),
        }
    }
}

impl OrderItemModel {
    pub fn from_item(order_id: &str, item: &OrderItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            price: item.price(),
            quantity: item.quantity(),
            order_id: order_id.to_string(),
            product_id: item.product_id().to_string(),
        }
    }
}

impl TryFrom<OrderItemModel> for OrderItem {
    type Error = RepositoryError;

    fn try_from(model: OrderItemModel) -> Result<Self, Self::Error> {
        Ok(OrderItem::new(
            model.id,
            model.name,
            model.price,
            model.product_id,
            model.quantity,
        )?)
    }
}

impl TryFrom<OrderModel> for Order {
    type Error = RepositoryError;

    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let items = model
            .items
            .into_iter()
            .map(OrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Order::new(model.id, model.customer_id, items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderError;

    fn create_test_order() -> Order {
        Order::new(
            "o1",
            "c1",
            vec![
                OrderItem::new("i1", "Product 1", 10.0, "p1", 2).unwrap(),
                OrderItem::new("i2", "Product 2", 2.5, "p2", 4).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_model_from_order() {
        let model = OrderModel::from(&create_test_order());

        assert_eq!(model.id, "o1");
        assert_eq!(model.customer_id, "c1");
        assert_eq!(model.total, 30.0);
        assert_eq!(model.items.len(), 2);
        assert!(model.items.iter().all(|item| item.order_id == "o1"));
        assert_eq!(model.items[1].product_id, "p2");
        assert_eq!(model.items[1].quantity, 4);
    }

    #[test]
    fn test_order_rebuilt_from_model() {
        let order = create_test_order();
        let rebuilt = Order::try_from(OrderModel::from(&order)).unwrap();
        assert_eq!(rebuilt, order);
    }

    #[test]
    fn test_order_without_item_rows_is_invalid() {
        let mut model = OrderModel::from(&create_test_order());
        model.items.clear();

        let result = Order::try_from(model);
        assert!(matches!(result.unwrap_err(), RepositoryError::Order(OrderError::EmptyItems)));
    }

    #[test]
    fn test_model_json_shape() {
        let model = OrderModel::from(&create_test_order());
        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "o1",
                "customer_id": "c1",
                "total": 30.0,
                "items": [
                    {
                        "id": "i1",
                        "name": "Product 1",
                        "price": 10.0,
                        "quantity": 2,
                        "order_id": "o1",
                        "product_id": "p1"
                    },
                    {
                        "id": "i2",
                        "name": "Product 2",
                        "price": 2.5,
                        "quantity": 4,
                        "order_id": "o1",
                        "product_id": "p2"
                    }
                ]
            })
        );
    }
}
