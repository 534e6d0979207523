use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::order_item::OrderItem;

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

/// Aggregate root owning its items.
///
/// Equality is structural: id, customer id and the ordered item list, each
/// item compared field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Sum of every line total.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::order_item_total).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
