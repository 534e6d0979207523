use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Item - one line of an order
// ============================================================================

/// Name and price are copied from the product when the line is created, so
/// later catalog changes do not alter placed orders.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, OrderError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyItemId);
        }
        if self.product_id.is_empty() {
            return Err(OrderError::EmptyProductId);
        }
        if self.quantity <= 0 {
            return Err(OrderError::InvalidQuantity(self.quantity));
        }
        if !(self.price.is_finite() && self.price >= 0.0) {
            return Err(OrderError::InvalidPrice(self.price));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Line total: price × quantity.
    pub fn order_item_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_creation() {
        let item = OrderItem::new("i1", "Product 123", 10.0, "123", 2).unwrap();

        assert_eq!(item.id(), "i1");
        assert_eq!(item.name(), "Product 123");
        assert_eq!(item.price(), 10.0);
        assert_eq!(item.product_id(), "123");
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn test_order_item_total() {
        let item = OrderItem::new("i1", "Product 123", 10.0, "123", 2).unwrap();
        assert_eq!(item.order_item_total(), 20.0);
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let result = OrderItem::new("i1", "Product", 10.0, "123", 0);
        assert!(matches!(result.unwrap_err(), OrderError::InvalidQuantity(0)));

        let result = OrderItem::new("i1", "Product", 10.0, "123", -3);
        assert!(matches!(result.unwrap_err(), OrderError::InvalidQuantity(-3)));
    }

    #[test]
    fn test_ids_are_required() {
        assert!(matches!(
            OrderItem::new("", "Product", 10.0, "123", 1).unwrap_err(),
            OrderError::EmptyItemId
        ));
        assert!(matches!(
            OrderItem::new("i1", "Product", 10.0, "", 1).unwrap_err(),
            OrderError::EmptyProductId
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = OrderItem::new("i1", "Product", -1.0, "123", 1);
        assert!(matches!(result.unwrap_err(), OrderError::InvalidPrice(_)));
    }

    #[test]
    fn test_infinite_price_rejected() {
        let result = OrderItem::new("i1", "Product", f64::INFINITY, "123", 1);
        assert!(matches!(result.unwrap_err(), OrderError::InvalidPrice(_)));

        let result = OrderItem::new("i1", "Product", f64::NAN, "123", 1);
        assert!(matches!(result.unwrap_err(), OrderError::InvalidPrice(_)));
    }

    #[test]
    fn test_order_item_serialization() {
        let item = OrderItem::new("i1", "Product 123", 10.0, "123", 3).unwrap();

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: OrderItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
    }
}
