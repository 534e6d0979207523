use serde::{Deserialize, Serialize};

use crate::domain::customer::{Address, Customer};
use crate::error::RepositoryError;

/// Row of the `customers` table. Address columns are all set or all NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CustomerModel {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: i64,
}

impl From<&Customer> for CustomerModel {
    fn from(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zipcode().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }
}

impl TryFrom<CustomerModel> for Customer {
    type Error = RepositoryError;

    fn try_from(model: CustomerModel) -> Result<Self, Self::Error> {
        let mut customer = Customer::new(model.id, model.name)?;

        match (model.street, model.number, model.zipcode, model.city) {
            (Some(street), Some(number), Some(zipcode), Some(city)) => {
                customer.change_address(Address::new(street, number, zipcode, city)?);
            }
            (None, None, None, None) => {}
            _ => {
                return Err(RepositoryError::InvalidRow(format!(
                    "customer {} has a partial address",
                    customer.id()
                )))
            }
        }

        if model.active {
            customer.activate()?;
        }
        customer.add_reward_points(model.reward_points)?;

        Ok(customer)
    }
}
