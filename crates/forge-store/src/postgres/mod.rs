//! PostgreSQL storage adapter implementation

pub mod config;
pub mod evaluation;
pub mod farm;
pub mod migrations;
pub mod proposal;

pub use config::{PoolConfig, PostgresConfig};
pub use migrations::{MigrationError, MigrationManager};

use forge_core::error::{ForgeError, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

/// PostgreSQL storage adapter
pub struct PostgresStore {
    pool: PgPool,
    config: PostgresConfig,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given configuration
    pub async fn new(config: PostgresConfig) -> Result<Self> {
        config.validate().map_err(|e| ForgeError::Storage(e.to_string()))?;

        let pool = PgPoolOptions::new()
            .min_connections(config.pool.min_connections)
            .max_connections(config.pool.max_connections)
            .acquire_timeout(config.pool.acquire_timeout)
            .idle_timeout(config.pool.idle_timeout)
            .max_lifetime(config.pool.max_lifetime)
            .connect(&config.database_url)
            .await
            .map_err(|e| ForgeError::Storage(format!("Failed to connect to database: {e}")))?;

        // Fail fast on a pool that cannot actually serve queries
        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .map_err(|e| ForgeError::Storage(format!("Connection test failed: {e}")))?;

        tracing::debug!(
            max_connections = config.pool.max_connections,
            "PostgreSQL pool ready"
        );
        Ok(Self { pool, config })
    }

    /// Create a new PostgreSQL store and run migrations
    pub async fn with_migrations(config: PostgresConfig) -> Result<Self> {
        let store = Self::new(config).await?;
        store.run_migrations().await?;
        Ok(store)
    }

    /// Run all pending migrations
    pub async fn run_migrations(&self) -> Result<()> {
        tracing::debug!("Applying pending database migrations");
        let manager = MigrationManager::new(self.pool.clone());
        manager
            .run_migrations()
            .await
            .map_err(|e| ForgeError::Storage(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }

    /// Perform a health check on the database connection
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ForgeError::Storage(format!("Health check failed: {e}")))?;
        Ok(())
    }
}
