//! End-to-end lifecycle tests over the in-memory backend: create an
//! evaluation, patch it, submit it, and render its proposal PDF.

use std::sync::Arc;

use forge_api::dto::{
    CreateEvaluationRequest, CreateProposalRequest, UpdateEvaluationRequest,
};
use forge_api::services::{EvaluationService, ProposalService};
use forge_core::models::{EvaluationId, OwnerId};
use forge_core::ForgeError;
use forge_store::memory::{MemoryEvaluationStore, MemoryFarmStore, MemoryProposalStore};
use uuid::Uuid;

fn evaluation_service() -> EvaluationService {
    EvaluationService::new(Arc::new(MemoryEvaluationStore::new()))
}

fn proposal_service(evaluations: Arc<MemoryEvaluationStore>) -> ProposalService {
    ProposalService::new(
        Arc::new(MemoryProposalStore::new()),
        evaluations,
        Arc::new(MemoryFarmStore::new()),
    )
}

fn owner() -> OwnerId {
    OwnerId::new("agent-007")
}

fn create_request(name: &str, area: f64, infrastructure: Option<&str>) -> CreateEvaluationRequest {
    CreateEvaluationRequest {
        name: Some(name.to_string()),
        farm_id: None,
        boundary: None,
        area: Some(area),
        area_unit: None,
        slope: None,
        infrastructure_recommendation: infrastructure.map(str::to_string),
        cost_currency: None,
    }
}

#[tokio::test]
async fn test_create_computes_cost_from_area_and_infrastructure() {
    let service = evaluation_service();

    let evaluation = service
        .create(owner(), &create_request("North plot", 6.0, Some("Shade Net")))
        .await
        .unwrap();

    assert_eq!(evaluation.cost_estimate, Some(2_400_000));
    assert_eq!(evaluation.cost_currency, "INR");
    assert_eq!(evaluation.status.as_str(), "draft");
}

#[tokio::test]
async fn test_create_without_infrastructure_has_no_cost() {
    let service = evaluation_service();

    let evaluation =
        service.create(owner(), &create_request("Bare plot", 3.0, None)).await.unwrap();

    assert_eq!(evaluation.cost_estimate, None);
}

#[tokio::test]
async fn test_update_recomputes_cost_when_area_changes() {
    let service = evaluation_service();
    let evaluation = service
        .create(owner(), &create_request("North plot", 4.0, Some("Polyhouse")))
        .await
        .unwrap();
    assert_eq!(evaluation.cost_estimate, Some(3_200_000));

    let patch = UpdateEvaluationRequest { area: Some(2.5), ..Default::default() };
    let updated = service.update(&owner(), evaluation.id, &patch).await.unwrap();

    assert_eq!(updated.area, 2.5);
    assert_eq!(updated.cost_estimate, Some(2_000_000));
}

#[tokio::test]
async fn test_update_recomputes_cost_when_infrastructure_changes() {
    let service = evaluation_service();
    let evaluation = service
        .create(owner(), &create_request("North plot", 4.0, Some("Polyhouse")))
        .await
        .unwrap();

    let patch = UpdateEvaluationRequest {
        infrastructure_recommendation: Some("Open Field".to_string()),
        ..Default::default()
    };
    let updated = service.update(&owner(), evaluation.id, &patch).await.unwrap();

    assert_eq!(updated.cost_estimate, Some(600_000));
}

#[tokio::test]
async fn test_update_without_cost_inputs_keeps_estimate() {
    let service = evaluation_service();
    let evaluation = service
        .create(owner(), &create_request("North plot", 4.0, Some("Polyhouse")))
        .await
        .unwrap();

    let patch =
        UpdateEvaluationRequest { name: Some("Renamed plot".to_string()), ..Default::default() };
    let updated = service.update(&owner(), evaluation.id, &patch).await.unwrap();

    assert_eq!(updated.name, "Renamed plot");
    assert_eq!(updated.cost_estimate, Some(3_200_000));
}

#[tokio::test]
async fn test_empty_patch_is_rejected() {
    let service = evaluation_service();
    let evaluation =
        service.create(owner(), &create_request("North plot", 1.0, None)).await.unwrap();

    let err = service
        .update(&owner(), evaluation.id, &UpdateEvaluationRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ForgeError::Validation { .. }));
}

#[tokio::test]
async fn test_submit_is_idempotent() {
    let service = evaluation_service();
    let evaluation =
        service.create(owner(), &create_request("North plot", 1.0, None)).await.unwrap();

    let submitted = service.submit(&owner(), evaluation.id).await.unwrap();
    assert_eq!(submitted.status.as_str(), "submitted");

    let again = service.submit(&owner(), evaluation.id).await.unwrap();
    assert_eq!(again.status.as_str(), "submitted");
    assert_eq!(again.updated_at, submitted.updated_at);
}

#[tokio::test]
async fn test_submitted_evaluation_rejects_edits() {
    let service = evaluation_service();
    let evaluation =
        service.create(owner(), &create_request("North plot", 1.0, None)).await.unwrap();
    service.submit(&owner(), evaluation.id).await.unwrap();

    let patch = UpdateEvaluationRequest { area: Some(9.0), ..Default::default() };
    let err = service.update(&owner(), evaluation.id, &patch).await.unwrap_err();

    assert!(matches!(err, ForgeError::InvalidState { .. }));
}

#[tokio::test]
async fn test_unknown_infrastructure_is_rejected() {
    let service = evaluation_service();

    let err = service
        .create(owner(), &create_request("North plot", 1.0, Some("Greenhouse")))
        .await
        .unwrap_err();

    assert!(matches!(err, ForgeError::Validation { .. }));
}

#[tokio::test]
async fn test_foreign_owner_sees_not_found() {
    let service = evaluation_service();
    let evaluation =
        service.create(owner(), &create_request("North plot", 1.0, None)).await.unwrap();

    let stranger = OwnerId::new("someone-else");
    let err = service.get(&stranger, evaluation.id).await.unwrap_err();

    assert!(matches!(err, ForgeError::NotFound { .. }));
}

#[tokio::test]
async fn test_get_missing_evaluation_is_not_found() {
    let service = evaluation_service();

    let err = service.get(&owner(), EvaluationId(Uuid::new_v4())).await.unwrap_err();

    assert!(matches!(err, ForgeError::NotFound { .. }));
}

#[tokio::test]
async fn test_proposal_pdf_requires_submitted_evaluation() {
    let evaluations = Arc::new(MemoryEvaluationStore::new());
    let evaluation_service = EvaluationService::new(evaluations.clone());
    let proposal_service = proposal_service(evaluations);

    let evaluation = evaluation_service
        .create(owner(), &create_request("North plot", 4.0, Some("Polyhouse")))
        .await
        .unwrap();

    let err = proposal_service.render_pdf(&owner(), evaluation.id).await.unwrap_err();
    assert!(matches!(err, ForgeError::InvalidState { .. }));

    evaluation_service.submit(&owner(), evaluation.id).await.unwrap();

    let rendered = proposal_service.render_pdf(&owner(), evaluation.id).await.unwrap();
    assert_eq!(&rendered.bytes[..5], b"%PDF-");
    assert!(rendered.filename.ends_with(".pdf"));
}

#[tokio::test]
async fn test_proposal_creation_requires_existing_evaluation() {
    let evaluations = Arc::new(MemoryEvaluationStore::new());
    let proposal_service = proposal_service(evaluations.clone());

    let request = CreateProposalRequest {
        title: Some("Polyhouse rollout".to_string()),
        site_evaluation_id: Some(Uuid::new_v4().to_string()),
        content: None,
    };
    let err = proposal_service.create(owner(), &request).await.unwrap_err();
    assert!(matches!(err, ForgeError::NotFound { .. }));

    let evaluation_service = EvaluationService::new(evaluations);
    let evaluation = evaluation_service
        .create(owner(), &create_request("North plot", 1.0, None))
        .await
        .unwrap();

    let request = CreateProposalRequest {
        title: Some("Polyhouse rollout".to_string()),
        site_evaluation_id: Some(evaluation.id.to_string()),
        content: None,
    };
    let proposal = proposal_service.create(owner(), &request).await.unwrap();
    assert_eq!(proposal.evaluation_id, evaluation.id);
    assert_eq!(proposal.status.as_str(), "draft");
}
