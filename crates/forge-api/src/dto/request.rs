use forge_core::models::{BoundaryPoint, FarmId};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Farm creation body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Farm patch body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFarmRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Evaluation creation body.
///
/// Required fields are still `Option` here so their absence surfaces as a
/// validation error rather than a deserialization failure. A
/// `costEstimate` key, if a client sends one, simply has no field to land
/// in and is dropped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvaluationRequest {
    pub name: Option<String>,
    pub farm_id: Option<FarmId>,
    pub boundary: Option<Vec<BoundaryPoint>>,
    pub area: Option<f64>,
    pub area_unit: Option<String>,
    pub slope: Option<f64>,
    pub infrastructure_recommendation: Option<String>,
    pub cost_currency: Option<String>,
}

/// Evaluation patch body: the explicit set of client-writable fields.
/// Neither cost nor status appears here; cost is derived server-side and
/// status only moves through the submit operation.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvaluationRequest {
    pub name: Option<String>,
    pub farm_id: Option<FarmId>,
    pub boundary: Option<Vec<BoundaryPoint>>,
    pub area: Option<f64>,
    pub area_unit: Option<String>,
    pub slope: Option<f64>,
    pub infrastructure_recommendation: Option<String>,
    pub cost_currency: Option<String>,
}

/// Query parameters for the evaluation list
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListEvaluationsQuery {
    pub farm_id: Option<FarmId>,
}

/// Boundary to measure
#[derive(Debug, Deserialize)]
pub struct PolygonMetricsRequest {
    pub boundary: Vec<BoundaryPoint>,
}

/// Proposal creation body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalRequest {
    pub title: Option<String>,
    pub site_evaluation_id: Option<String>,
    pub content: Option<JsonValue>,
}

/// Proposal patch body
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProposalRequest {
    pub title: Option<String>,
    pub content: Option<JsonValue>,
    pub status: Option<String>,
}
