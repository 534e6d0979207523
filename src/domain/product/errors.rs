// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product id cannot be empty")]
    EmptyId,

    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Product price must be a finite number greater or equal to zero, got {0}")]
    NegativePrice(f64),
}
