// ============================================================================
// Order Persistence - `orders` + `order_items` tables
// ============================================================================

pub mod model;
pub mod repository;

pub use model::{OrderItemModel, OrderModel};
pub use repository::OrderRepository;
