// ============================================================================
// Product Domain - Catalog entries referenced by order items
// ============================================================================

pub mod errors;
pub mod aggregate;

pub use errors::*;
pub use aggregate::*;
