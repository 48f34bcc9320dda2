//! PostgreSQL configuration

use std::time::Duration;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(String),

    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Connection pool tuning
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

/// PostgreSQL connection and behavior configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub pool: PoolConfig,
}

impl PostgresConfig {
    /// Build a configuration from a `DATABASE_URL` connection string with
    /// default pool settings.
    pub fn from_database_url(database_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self { database_url: database_url.into(), pool: PoolConfig::default() };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration before opening a pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.is_empty() {
            return Err(ConfigError::Missing("database_url".to_string()));
        }
        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            return Err(ConfigError::Invalid {
                key: "database_url".to_string(),
                reason: "must start with postgres:// or postgresql://".to_string(),
            });
        }
        if self.pool.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "pool.max_connections".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.pool.min_connections > self.pool.max_connections {
            return Err(ConfigError::Invalid {
                key: "pool.min_connections".to_string(),
                reason: "must not exceed max_connections".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_postgres_urls() {
        assert!(PostgresConfig::from_database_url("postgres://localhost/forge").is_ok());
        assert!(PostgresConfig::from_database_url("postgresql://localhost/forge").is_ok());
    }

    #[test]
    fn rejects_non_postgres_urls() {
        assert!(PostgresConfig::from_database_url("mysql://localhost/forge").is_err());
        assert!(PostgresConfig::from_database_url("").is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let mut config = PostgresConfig::from_database_url("postgres://localhost/forge").unwrap();
        config.pool.min_connections = 20;
        config.pool.max_connections = 10;
        assert!(config.validate().is_err());
    }
}
