use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::product::Product;
use crate::domain::RepositoryInterface;
use crate::error::RepositoryError;

use super::model::ProductModel;

#[derive(Clone, Debug)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RepositoryInterface<Product> for ProductRepository {
    async fn create(&self, entity: &Product) -> Result<(), RepositoryError> {
        let model = ProductModel::from(entity);

        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(&model.id)
            .bind(&model.name)
            .bind(model.price)
            .execute(&self.pool)
            .await?;

        tracing::info!(product_id = %model.id, price = model.price, "Created product");
        Ok(())
    }

    async fn update(&self, entity: &Product) -> Result<(), RepositoryError> {
        let model = ProductModel::from(entity);

        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&model.name)
            .bind(model.price)
            .bind(&model.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(product_id = %model.id, "Update of unknown product");
            return Err(RepositoryError::not_found("Product", model.id));
        }

        tracing::info!(product_id = %model.id, "Updated product");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let model = sqlx::query_as::<_, ProductModel>(
            "SELECT id, name, price FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Product", id))?;

        tracing::debug!(product_id = %id, "Loaded product");
        Product::try_from(model)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let models = sqlx::query_as::<_, ProductModel>(
            "SELECT id, name, price FROM products ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = models.len(), "Loaded products");
        models.into_iter().map(Product::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Database;

    #[tokio::test]
    async fn test_create_product() {
        let db = Database::in_memory().await.unwrap();
        let repository = ProductRepository::new(db.pool().clone());
        let product = Product::new("1", "Product 1", 100.0).unwrap();

        repository.create(&product).await.unwrap();

        let model = sqlx::query_as::<_, ProductModel>("SELECT id, name, price FROM products WHERE id = ?")
            .bind("1")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(
            model,
            ProductModel {
                id: "1".to_string(),
                name: "Product 1".to_string(),
                price: 100.0,
            }
        );
        db.close().await;
    }

    #[tokio::test]
    async fn test_update_product() {
        let db = Database::in_memory().await.unwrap();
        let repository = ProductRepository::new(db.pool().clone());
        let mut product = Product::new("1", "Product 1", 100.0).unwrap();
        repository.create(&product).await.unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(200.0).unwrap();
        repository.update(&product).await.unwrap();

        assert_eq!(repository.find("1").await.unwrap(), product);
        db.close().await;
    }

    #[tokio::test]
    async fn test_update_unknown_product_fails() {
        let db = Database::in_memory().await.unwrap();
        let repository = ProductRepository::new(db.pool().clone());

        let result = repository
            .update(&Product::new("missing", "Nothing", 1.0).unwrap())
            .await;

        assert!(result.unwrap_err().is_not_found());
        db.close().await;
    }

    #[tokio::test]
    async fn test_find_missing_product() {
        let db = Database::in_memory().await.unwrap();
        let repository = ProductRepository::new(db.pool().clone());

        let err = repository.find("nope").await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { entity: "Product", .. }));
        db.close().await;
    }

    #[tokio::test]
    async fn test_find_all_products() {
        let db = Database::in_memory().await.unwrap();
        let repository = ProductRepository::new(db.pool().clone());
        let first = Product::new("1", "Product 1", 100.0).unwrap();
        let second = Product::new("2", "Product 2", 200.0).unwrap();
        repository.create(&first).await.unwrap();
        repository.create(&second).await.unwrap();

        let products = repository.find_all().await.unwrap();

        assert_eq!(products, vec![first, second]);
        db.close().await;
    }

    #[tokio::test]
    async fn test_duplicate_product_is_constraint_violation() {
        let db = Database::in_memory().await.unwrap();
        let repository = ProductRepository::new(db.pool().clone());
        let product = Product::new("1", "Product 1", 100.0).unwrap();
        repository.create(&product).await.unwrap();

        let err = repository.create(&product).await.unwrap_err();

        assert!(err.is_constraint_violation());
        db.close().await;
    }
}
