use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use forge_core::models::{Farm, FarmId};
use forge_core::ForgeError;

use crate::auth::Owner;
use crate::dto::{CreateFarmRequest, DeleteResponse, FarmResponse, UpdateFarmRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_farms(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
) -> Result<Json<Vec<FarmResponse>>, ApiError> {
    let farms = state.farm_store.list_farms(&owner).await?;
    Ok(Json(farms.into_iter().map(FarmResponse::from).collect()))
}

pub async fn create_farm(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Json(request): Json<CreateFarmRequest>,
) -> Result<(StatusCode, Json<FarmResponse>), ApiError> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ForgeError::validation("Farm name is required"))?;

    let now = Utc::now();
    let farm = Farm {
        id: FarmId::new(),
        owner,
        name: name.to_string(),
        description: request.description,
        location: request.location,
        created_at: now,
        updated_at: now,
    };

    state.farm_store.create_farm(&farm).await?;
    tracing::info!(id = %farm.id, owner = %farm.owner, "Created farm");
    Ok((StatusCode::CREATED, Json(farm.into())))
}

pub async fn get_farm(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<Json<FarmResponse>, ApiError> {
    let id = parse_farm_id(&id)?;
    let farm = state
        .farm_store
        .get_farm(&owner, id)
        .await?
        .ok_or_else(|| ForgeError::not_found("Farm"))?;
    Ok(Json(farm.into()))
}

pub async fn update_farm(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
    Json(request): Json<UpdateFarmRequest>,
) -> Result<Json<FarmResponse>, ApiError> {
    let id = parse_farm_id(&id)?;
    let mut farm = state
        .farm_store
        .get_farm(&owner, id)
        .await?
        .ok_or_else(|| ForgeError::not_found("Farm"))?;

    if let Some(name) = request.name.as_deref() {
        let name = name.trim();
        if name.is_empty() {
            return Err(ForgeError::validation("Farm name must not be empty").into());
        }
        farm.name = name.to_string();
    }
    if let Some(description) = request.description {
        farm.description = Some(description);
    }
    if let Some(location) = request.location {
        farm.location = Some(location);
    }
    farm.updated_at = Utc::now();

    if !state.farm_store.update_farm(&farm).await? {
        return Err(ForgeError::not_found("Farm").into());
    }
    Ok(Json(farm.into()))
}

pub async fn delete_farm(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let farm_id = parse_farm_id(&id)?;
    if !state.farm_store.delete_farm(&owner, farm_id).await? {
        return Err(ForgeError::not_found("Farm").into());
    }
    tracing::info!(id = %farm_id, owner = %owner, "Deleted farm");
    Ok(Json(DeleteResponse::success("farm", &id)))
}

fn parse_farm_id(raw: &str) -> Result<FarmId, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request("Invalid farm ID format"))
}
