// src/infrastructure/database/mod.rs
// SQLite connection pool and repository implementations

mod catalog;
mod orders;
mod rows;
pub mod schema;
mod users;

pub use catalog::{SqliteCategoryRepository, SqliteProductRepository};
pub use orders::SqliteOrderRepository;
pub use users::SqliteUserRepository;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::domain::errors::{AppError, AppResult, DomainError};

impl From<sqlx::Error> for DomainError {
    fn from(error: sqlx::Error) -> Self {
        DomainError::Persistence(error.to_string())
    }
}

/// Handle to the shop database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool against the configured database file
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| AppError::Database(format!("Invalid database URL {}: {}", config.url, e)))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(config.acquire_timeout_secs));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to {}: {}", config.url, e)))?;

        log::info!(
            "Connected to {} (max {} connections)",
            config.url,
            config.max_connections
        );

        Ok(Self { pool })
    }

    /// Private in-memory database with the schema applied.
    ///
    /// Backed by a single connection that never expires, since every
    /// SQLite in-memory connection is its own database.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::Database(e.to_string()))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open in-memory database: {}", e)))?;

        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    /// Create any missing tables and indexes
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in schema::STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Schema migration failed: {}", e)))?;
        }

        log::debug!("Applied {} schema statements", schema::STATEMENTS.len());
        Ok(())
    }

    pub fn users(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(self.pool.clone())
    }

    pub fn categories(&self) -> SqliteCategoryRepository {
        SqliteCategoryRepository::new(self.pool.clone())
    }

    pub fn products(&self) -> SqliteProductRepository {
        SqliteProductRepository::new(self.pool.clone())
    }

    pub fn orders(&self) -> SqliteOrderRepository {
        SqliteOrderRepository::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
