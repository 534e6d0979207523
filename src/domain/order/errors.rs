// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order id cannot be empty")]
    EmptyId,

    #[error("Customer id cannot be empty")]
    EmptyCustomerId,

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Order item id cannot be empty")]
    EmptyItemId,

    #[error("Product id cannot be empty")]
    EmptyProductId,

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Invalid item price: {0}")]
    InvalidPrice(f64),
}
