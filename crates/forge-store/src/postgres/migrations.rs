use sqlx::PgPool;
use thiserror::Error;

/// Migration error types
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Migration failed: {0}")]
    Failed(#[from] sqlx::migrate::MigrateError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Migration manager for handling database schema migrations
pub struct MigrationManager {
    pool: PgPool,
}

impl MigrationManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply all migrations that haven't been applied yet, in version
    /// order. Uses sqlx's built-in migration system over the embedded
    /// `migrations/` directory.
    pub async fn run_migrations(&self) -> Result<(), MigrationError> {
        sqlx::migrate!("./migrations").run(&self.pool).await.map_err(MigrationError::Failed)?;
        Ok(())
    }

    /// Get the current schema version (highest applied migration)
    pub async fn current_version(&self) -> Result<Option<i64>, MigrationError> {
        let version: Option<(i64,)> =
            sqlx::query_as("SELECT version FROM _sqlx_migrations ORDER BY version DESC LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;

        Ok(version.map(|(v,)| v))
    }
}
