use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::error::RepositoryError;

// ============================================================================
// Database Handle
// ============================================================================
//
// Owns the connection pool shared by every repository.
//
// An in-memory SQLite database lives and dies with its connection, so the
// pool is pinned to a single connection that never idles out. Callers must
// not hold a transaction while issuing another query through the pool.
//
// ============================================================================

/// Tables in creation order (parents before children)
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        street TEXT,
        number INTEGER,
        zipcode TEXT,
        city TEXT,
        active BOOLEAN NOT NULL DEFAULT 0,
        reward_points INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        price REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY NOT NULL,
        customer_id TEXT NOT NULL REFERENCES customers(id),
        total REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        id TEXT PRIMARY KEY NOT NULL,
        product_id TEXT NOT NULL REFERENCES products(id),
        order_id TEXT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
        quantity INTEGER NOT NULL,
        name TEXT NOT NULL,
        price REAL NOT NULL
    )",
];

/// Children before parents
const TABLES_DROP_ORDER: &[&str] = &["order_items", "orders", "products", "customers"];

#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .foreign_keys(true)
            .create_if_missing(true);

        let mut pool_options =
            SqlitePoolOptions::new().max_connections(config.effective_max_connections());
        if config.is_in_memory() {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        tracing::info!(
            url = %config.url,
            max_connections = config.effective_max_connections(),
            "Connected to database"
        );

        Ok(Self { pool })
    }

    /// Fresh private in-memory database with the schema already created
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let db = Self::connect(&DatabaseConfig::in_memory()).await?;
        db.sync().await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create missing tables; existing tables and rows are left alone
    pub async fn sync(&self) -> Result<(), RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::debug!(tables = SCHEMA.len(), "Schema synchronized");
        Ok(())
    }

    /// Drop every table and recreate the schema empty
    pub async fn reset(&self) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        for table in TABLES_DROP_ORDER {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
                .execute(&mut *tx)
                .await?;
        }
        for statement in SCHEMA {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        tracing::info!("Schema reset");
        Ok(())
    }

    /// Release every connection; in-memory data is gone afterwards
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("Database closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_names(db: &Database) -> Vec<String> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_creates_schema() {
        let db = Database::in_memory().await.unwrap();

        assert_eq!(
            table_names(&db).await,
            vec!["customers", "order_items", "orders", "products"]
        );

        db.close().await;
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        sqlx::query("INSERT INTO products (id, name, price) VALUES ('1', 'P', 1.0)")
            .execute(db.pool())
            .await
            .unwrap();

        db.sync().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);

        db.close().await;
    }

    #[tokio::test]
    async fn test_reset_empties_tables() {
        let db = Database::in_memory().await.unwrap();
        sqlx::query("INSERT INTO products (id, name, price) VALUES ('1', 'P', 1.0)")
            .execute(db.pool())
            .await
            .unwrap();

        db.reset().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(table_names(&db).await.len(), 4);

        db.close().await;
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let db = Database::in_memory().await.unwrap();

        let result = sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES ('1', 'ghost', 0)")
            .execute(db.pool())
            .await;

        let err = RepositoryError::from(result.unwrap_err());
        assert!(err.is_constraint_violation());

        db.close().await;
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let a = Database::in_memory().await.unwrap();
        let b = Database::in_memory().await.unwrap();

        sqlx::query("INSERT INTO products (id, name, price) VALUES ('1', 'P', 1.0)")
            .execute(a.pool())
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(b.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);

        a.close().await;
        b.close().await;
    }
}
