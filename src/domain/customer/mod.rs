// ============================================================================
// Customer Domain - Business Logic for Customer Aggregate
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Errors (CustomerError enum)
// - Aggregate (Customer with its invariants)
//
// Persistence lives in src/infrastructure/customer/.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
