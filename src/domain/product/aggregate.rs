use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Finite and not negative; rejects NaN and infinities.
fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        if !is_valid_price(self.price) {
            return Err(ProductError::NegativePrice(self.price));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        if !is_valid_price(price) {
            return Err(ProductError::NegativePrice(price));
        }
        self.price = price;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("123", "Product 123", 10.0).unwrap();

        assert_eq!(product.id(), "123");
        assert_eq!(product.name(), "Product 123");
        assert_eq!(product.price(), 10.0);
    }

    #[test]
    fn test_product_validation() {
        assert!(matches!(Product::new("", "P", 1.0).unwrap_err(), ProductError::EmptyId));
        assert!(matches!(Product::new("1", "", 1.0).unwrap_err(), ProductError::EmptyName));
        assert!(matches!(
            Product::new("1", "P", -1.0).unwrap_err(),
            ProductError::NegativePrice(_)
        ));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        for price in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(matches!(
                Product::new("1", "P", price).unwrap_err(),
                ProductError::NegativePrice(_)
            ));
        }

        let mut product = Product::new("1", "P", 5.0).unwrap();
        assert!(product.change_price(f64::INFINITY).is_err());
        assert_eq!(product.price(), 5.0);
    }

    #[test]
    fn test_free_product_is_allowed() {
        let product = Product::new("1", "Sample", 0.0).unwrap();
        assert_eq!(product.price(), 0.0);
    }

    #[test]
    fn test_change_name_and_price() {
        let mut product = Product::new("123", "Product 123", 10.0).unwrap();

        product.change_name("Product 456").unwrap();
        product.change_price(25.5).unwrap();

        assert_eq!(product.name(), "Product 456");
        assert_eq!(product.price(), 25.5);
    }

    #[test]
    fn test_change_price_rejects_negative() {
        let mut product = Product::new("123", "Product 123", 10.0).unwrap();

        let result = product.change_price(-0.5);
        assert!(matches!(result.unwrap_err(), ProductError::NegativePrice(_)));
        assert_eq!(product.price(), 10.0);
    }
}
