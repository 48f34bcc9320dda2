use std::sync::Arc;

use axum::{extract::State, Json};
use forge_geo::{validate_boundary, PolygonMetrics};

use crate::auth::Owner;
use crate::dto::PolygonMetricsRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Measure a boundary polygon with the configured map provider.
///
/// The engine itself does not range-check coordinates, so they are
/// validated here before anything is computed.
pub async fn polygon_metrics(
    State(state): State<Arc<AppState>>,
    Owner(_owner): Owner,
    Json(request): Json<PolygonMetricsRequest>,
) -> Result<Json<PolygonMetrics>, ApiError> {
    validate_boundary(&request.boundary)?;
    Ok(Json(state.geometry.polygon_metrics(&request.boundary)))
}
