// ============================================================================
// Infrastructure Layer - SQLite persistence
// ============================================================================
//
// Each aggregate gets:
// - Model: row structs plus the typed mapping to and from the domain object
// - Repository: RepositoryInterface implementation over a SqlitePool
//
// ============================================================================

pub mod db;
pub mod customer;
pub mod product;
pub mod order;

pub use db::Database;
pub use customer::CustomerRepository;
pub use product::ProductRepository;
pub use order::OrderRepository;
