// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific aggregates and business logic.
// Each aggregate has its own subdirectory with:
// - Value objects / child entities
// - Errors
// - Aggregate implementation
//
// This layer knows nothing about SQL; the repository contract it exposes is
// implemented in src/infrastructure/.
//
// ============================================================================

pub mod customer;
pub mod product;
pub mod order;
pub mod repository;

pub use repository::RepositoryInterface;
