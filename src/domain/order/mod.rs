// ============================================================================
// Order Domain - Business Logic for Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Entities (OrderItem, owned exclusively by its Order)
// - Errors (OrderError enum)
// - Aggregate (Order, the aggregate root and only access path to its items)
//
// ============================================================================

pub mod order_item;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use order_item::*;
pub use errors::*;
pub use aggregate::*;
