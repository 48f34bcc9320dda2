use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderName, HeaderValue, Method};
use forge_geo::{provider_by_name, GeometryEngine};
use forge_store::memory::{MemoryEvaluationStore, MemoryFarmStore, MemoryProposalStore};
use forge_store::ports::{EvaluationStore, FarmStore, ProposalStore};
use forge_store::postgres::{PostgresConfig, PostgresStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forge_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forge_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();

    tracing::info!(
        port = config.port,
        map_provider = %config.map_provider,
        postgres = config.uses_postgres(),
        "Starting Forge API server"
    );

    let geometry = match provider_by_name(&config.map_provider) {
        Some(provider) => GeometryEngine::new(provider),
        None => {
            tracing::warn!(
                requested = %config.map_provider,
                "Unknown map provider, falling back to OpenStreetMap"
            );
            GeometryEngine::osm()
        }
    };

    let (farm_store, evaluation_store, proposal_store): (
        Arc<dyn FarmStore>,
        Arc<dyn EvaluationStore>,
        Arc<dyn ProposalStore>,
    ) = match &config.database_url {
        Some(database_url) => {
            tracing::info!("DATABASE_URL found, connecting to PostgreSQL...");
            let store = init_postgres_storage(database_url).await?;
            tracing::info!("Connected to PostgreSQL");
            (store.clone(), store.clone(), store)
        }
        None => {
            tracing::info!("Using in-memory storage (set DATABASE_URL for PostgreSQL)");
            (
                Arc::new(MemoryFarmStore::new()),
                Arc::new(MemoryEvaluationStore::new()),
                Arc::new(MemoryProposalStore::new()),
            )
        }
    };

    let state = Arc::new(AppState::new(farm_store, evaluation_store, proposal_store, geometry));

    let cors_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid FORGE_CORS_ORIGIN: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-owner-id")]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Initialize PostgreSQL storage from a database URL
async fn init_postgres_storage(database_url: &str) -> anyhow::Result<Arc<PostgresStore>> {
    let config =
        PostgresConfig::from_database_url(database_url).context("Invalid DATABASE_URL")?;

    let store = PostgresStore::with_migrations(config)
        .await
        .context("PostgreSQL connection failed")?;
    Ok(Arc::new(store))
}
