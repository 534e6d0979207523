use crate::domain::customer::CustomerError;
use crate::domain::order::OrderError;
use crate::domain::product::ProductError;

// ============================================================================
// Repository Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Duplicate primary key or a reference to a missing row
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Stored customer is invalid: {0}")]
    Customer(#[from] CustomerError),

    #[error("Stored product is invalid: {0}")]
    Product(#[from] ProductError),

    #[error("Stored order is invalid: {0}")]
    Order(#[from] OrderError),

    #[error("Stored row is inconsistent: {0}")]
    InvalidRow(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation()
                    || db.message().contains("constraint failed") =>
            {
                Self::ConstraintViolation(db.message().to_string())
            }
            _ => Self::Database(err),
        }
    }
}
