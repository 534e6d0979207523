use async_trait::async_trait;

use crate::error::RepositoryError;

// ============================================================================
// Repository Contract
// ============================================================================
//
// Collection-like access to an aggregate. Every call is one or more round
// trips to the backing store; writes are not idempotent (creating the same
// id twice is a constraint violation).
//
// ============================================================================

/// Generic repository trait - every aggregate repository implements this
///
/// Type Parameter:
/// - `T`: The aggregate root stored by the repository
#[async_trait]
pub trait RepositoryInterface<T>: Send + Sync {
    /// Persist a new aggregate together with any owned children
    async fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Overwrite an existing aggregate; unknown ids fail with NotFound
    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Load one aggregate by id
    async fn find(&self, id: &str) -> Result<T, RepositoryError>;

    /// Load every stored aggregate, in insertion order
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
}
