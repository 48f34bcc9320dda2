use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Farms
        .route("/api/v1/farms", get(handlers::list_farms).post(handlers::create_farm))
        .route(
            "/api/v1/farms/{id}",
            get(handlers::get_farm)
                .patch(handlers::update_farm)
                .delete(handlers::delete_farm),
        )

        // Site evaluations
        .route(
            "/api/v1/site-evaluations",
            get(handlers::list_evaluations).post(handlers::create_evaluation),
        )
        .route(
            "/api/v1/site-evaluations/{id}",
            get(handlers::get_evaluation)
                .patch(handlers::update_evaluation)
                .delete(handlers::delete_evaluation),
        )
        .route("/api/v1/site-evaluations/{id}/submit", post(handlers::submit_evaluation))

        // Geometry
        .route("/api/v1/geometry/metrics", post(handlers::polygon_metrics))

        // Proposals ({id} on the pdf route is a site-evaluation id)
        .route(
            "/api/v1/proposals",
            get(handlers::list_proposals).post(handlers::create_proposal),
        )
        .route(
            "/api/v1/proposals/{id}",
            get(handlers::get_proposal).patch(handlers::update_proposal),
        )
        .route("/api/v1/proposals/{id}/pdf", get(handlers::get_proposal_pdf))

        .with_state(state)
}
