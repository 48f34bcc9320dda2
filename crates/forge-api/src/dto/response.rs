use chrono::{DateTime, Utc};
use forge_core::models::{BoundaryPoint, Farm, Proposal, SiteEvaluation};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "forge-api" }
    }
}

/// Farm response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Farm> for FarmResponse {
    fn from(farm: Farm) -> Self {
        Self {
            id: farm.id.to_string(),
            name: farm.name,
            description: farm.description,
            location: farm.location,
            created_at: farm.created_at,
            updated_at: farm.updated_at,
        }
    }
}

/// Site-evaluation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_id: Option<String>,
    pub name: String,
    pub boundary: Vec<BoundaryPoint>,
    pub area: f64,
    pub area_unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure_recommendation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<i64>,
    pub cost_currency: String,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteEvaluation> for EvaluationResponse {
    fn from(evaluation: SiteEvaluation) -> Self {
        Self {
            id: evaluation.id.to_string(),
            farm_id: evaluation.farm_id.map(|f| f.to_string()),
            name: evaluation.name,
            boundary: evaluation.boundary,
            area: evaluation.area,
            area_unit: evaluation.area_unit.as_str(),
            slope: evaluation.slope,
            infrastructure_recommendation: evaluation.infrastructure.map(|i| i.as_str()),
            cost_estimate: evaluation.cost_estimate,
            cost_currency: evaluation.cost_currency,
            status: evaluation.status.as_str(),
            created_at: evaluation.created_at,
            updated_at: evaluation.updated_at,
        }
    }
}

/// Proposal response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponse {
    pub id: String,
    pub site_evaluation_id: String,
    pub title: String,
    pub content: JsonValue,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Proposal> for ProposalResponse {
    fn from(proposal: Proposal) -> Self {
        Self {
            id: proposal.id.to_string(),
            site_evaluation_id: proposal.evaluation_id.to_string(),
            title: proposal.title,
            content: proposal.content,
            status: proposal.status.as_str(),
            created_at: proposal.created_at,
            updated_at: proposal.updated_at,
        }
    }
}

/// Delete operation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn success(entity: &str, id: &str) -> Self {
        Self { success: true, message: format!("Successfully deleted {entity} {id}") }
    }
}
