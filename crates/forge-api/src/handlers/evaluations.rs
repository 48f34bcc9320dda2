use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use forge_core::models::EvaluationId;

use crate::auth::Owner;
use crate::dto::{
    CreateEvaluationRequest, DeleteResponse, EvaluationResponse, ListEvaluationsQuery,
    UpdateEvaluationRequest,
};
use crate::error::ApiError;
use crate::services::EvaluationService;
use crate::state::AppState;

pub async fn list_evaluations(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Query(query): Query<ListEvaluationsQuery>,
) -> Result<Json<Vec<EvaluationResponse>>, ApiError> {
    let evaluations = EvaluationService::new(state.evaluation_store.clone())
        .list(&owner, query.farm_id)
        .await?;
    Ok(Json(evaluations.into_iter().map(EvaluationResponse::from).collect()))
}

pub async fn create_evaluation(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Json(request): Json<CreateEvaluationRequest>,
) -> Result<(StatusCode, Json<EvaluationResponse>), ApiError> {
    let evaluation = EvaluationService::new(state.evaluation_store.clone())
        .create(owner, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(evaluation.into())))
}

pub async fn get_evaluation(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let id = parse_evaluation_id(&id)?;
    let evaluation =
        EvaluationService::new(state.evaluation_store.clone()).get(&owner, id).await?;
    Ok(Json(evaluation.into()))
}

pub async fn update_evaluation(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
    Json(request): Json<UpdateEvaluationRequest>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let id = parse_evaluation_id(&id)?;
    let evaluation = EvaluationService::new(state.evaluation_store.clone())
        .update(&owner, id, &request)
        .await?;
    Ok(Json(evaluation.into()))
}

pub async fn submit_evaluation(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let id = parse_evaluation_id(&id)?;
    let evaluation =
        EvaluationService::new(state.evaluation_store.clone()).submit(&owner, id).await?;
    Ok(Json(evaluation.into()))
}

pub async fn delete_evaluation(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let evaluation_id = parse_evaluation_id(&id)?;
    EvaluationService::new(state.evaluation_store.clone())
        .delete(&owner, evaluation_id)
        .await?;
    Ok(Json(DeleteResponse::success("site evaluation", &id)))
}

fn parse_evaluation_id(raw: &str) -> Result<EvaluationId, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request("Invalid evaluation ID format"))
}
