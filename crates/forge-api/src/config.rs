use std::env;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub database_url: Option<String>,
    pub map_provider: String,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("FORGE_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(4000);

        let cors_origin =
            env::var("FORGE_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let database_url = env::var("DATABASE_URL").ok();

        let map_provider =
            env::var("FORGE_MAP_PROVIDER").unwrap_or_else(|_| "openstreetmap".to_string());

        Self { port, cors_origin, database_url, map_provider }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if PostgreSQL storage is configured
    pub fn uses_postgres(&self) -> bool {
        self.database_url.is_some()
    }
}
