// ============================================================================
// E-commerce domain model with SQLite-backed repositories
// ============================================================================
//
// - domain/: Customer, Product and Order aggregates with their invariants
// - infrastructure/: sqlx models and repositories
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use config::DatabaseConfig;
pub use domain::RepositoryInterface;
pub use error::RepositoryError;
