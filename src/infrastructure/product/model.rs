use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::error::RepositoryError;

/// Row of the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

impl TryFrom<ProductModel> for Product {
    type Error = RepositoryError;

    fn try_from(model: ProductModel) -> Result<Self, Self::Error> {
        Ok(Product::new(model.id, model.name, model.price)?)
    }
}
