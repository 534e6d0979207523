// ============================================================================
// Customer Persistence - `customers` table
// ============================================================================

pub mod model;
pub mod repository;

pub use model::CustomerModel;
pub use repository::CustomerRepository;
