use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use forge_core::models::{EvaluationId, ProposalId};

use crate::auth::Owner;
use crate::dto::{CreateProposalRequest, ProposalResponse, UpdateProposalRequest};
use crate::error::ApiError;
use crate::services::ProposalService;
use crate::state::AppState;

pub async fn list_proposals(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
) -> Result<Json<Vec<ProposalResponse>>, ApiError> {
    let proposals = service(&state).list(&owner).await?;
    Ok(Json(proposals.into_iter().map(ProposalResponse::from).collect()))
}

pub async fn create_proposal(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Json(request): Json<CreateProposalRequest>,
) -> Result<(StatusCode, Json<ProposalResponse>), ApiError> {
    let proposal = service(&state).create(owner, &request).await?;
    Ok((StatusCode::CREATED, Json(proposal.into())))
}

pub async fn get_proposal(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<Json<ProposalResponse>, ApiError> {
    let id = parse_proposal_id(&id)?;
    let proposal = service(&state).get(&owner, id).await?;
    Ok(Json(proposal.into()))
}

pub async fn update_proposal(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
    Json(request): Json<UpdateProposalRequest>,
) -> Result<Json<ProposalResponse>, ApiError> {
    let id = parse_proposal_id(&id)?;
    let proposal = service(&state).update(&owner, id, &request).await?;
    Ok(Json(proposal.into()))
}

/// Download the proposal PDF for a submitted site evaluation. The path
/// parameter is the evaluation id, not a proposal record id.
pub async fn get_proposal_pdf(
    State(state): State<Arc<AppState>>,
    Owner(owner): Owner,
    Path(id): Path<String>,
) -> Result<(HeaderMap, Vec<u8>), ApiError> {
    let evaluation_id: EvaluationId = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid evaluation ID format"))?;
    let rendered = service(&state).render_pdf(&owner, evaluation_id).await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    let disposition = format!("attachment; filename=\"{}\"", rendered.filename);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|_| ApiError::internal("Invalid proposal filename"))?,
    );
    Ok((headers, rendered.bytes))
}

fn service(state: &AppState) -> ProposalService {
    ProposalService::new(
        state.proposal_store.clone(),
        state.evaluation_store.clone(),
        state.farm_store.clone(),
    )
}

fn parse_proposal_id(raw: &str) -> Result<ProposalId, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request("Invalid proposal ID format"))
}
