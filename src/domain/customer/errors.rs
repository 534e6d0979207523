// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer id cannot be empty")]
    EmptyId,

    #[error("Customer name cannot be empty")]
    EmptyName,

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    #[error("Street cannot be empty")]
    EmptyStreet,

    #[error("Invalid street number: {0}")]
    InvalidStreetNumber(i32),

    #[error("Zipcode cannot be empty")]
    EmptyZipcode,

    #[error("City cannot be empty")]
    EmptyCity,

    #[error("Invalid reward points: {0}")]
    InvalidRewardPoints(i64),

    #[error("Adding {0} reward points overflows the balance")]
    RewardPointsOverflow(i64),
}
