use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer mailing address
///
/// Immutable once built: fields are only readable through accessors and a
/// changed address means building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: i32,
    zipcode: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i32,
        zipcode: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zipcode: zipcode.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.is_empty() {
            return Err(CustomerError::EmptyStreet);
        }
        if self.number <= 0 {
            return Err(CustomerError::InvalidStreetNumber(self.number));
        }
        if self.zipcode.is_empty() {
            return Err(CustomerError::EmptyZipcode);
        }
        if self.city.is_empty() {
            return Err(CustomerError::EmptyCity);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zipcode, self.city)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
