//! Site-evaluation lifecycle: the one place that creates, mutates, submits
//! and deletes evaluations.
//!
//! The cost estimate is owned by this service. It is recomputed from area
//! and infrastructure whenever either changes and is never taken from a
//! request; the request types have no field for it. A failed recomputation
//! aborts the whole operation before anything reaches the store, so there
//! are no partial writes.

use std::sync::Arc;

use chrono::Utc;
use forge_core::cost::{calculate_cost, InfrastructureType};
use forge_core::models::{
    AreaUnit, EvaluationId, EvaluationPatch, EvaluationStatus, FarmId, NewEvaluation, OwnerId,
    SiteEvaluation,
};
use forge_core::{ForgeError, Result};
use forge_geo::validate_boundary;
use forge_store::ports::EvaluationStore;

use crate::dto::{CreateEvaluationRequest, UpdateEvaluationRequest};

pub struct EvaluationService {
    store: Arc<dyn EvaluationStore>,
}

impl EvaluationService {
    pub fn new(store: Arc<dyn EvaluationStore>) -> Self {
        Self { store }
    }

    /// Create a draft evaluation. Cost is computed immediately when both an
    /// infrastructure recommendation and an area are present.
    pub async fn create(
        &self,
        owner: OwnerId,
        request: &CreateEvaluationRequest,
    ) -> Result<SiteEvaluation> {
        let new = Self::new_from_request(request)?;
        validate_boundary(&new.boundary)?;

        let cost_estimate =
            new.infrastructure.map(|i| calculate_cost(new.area, i)).transpose()?;

        let now = Utc::now();
        let evaluation = SiteEvaluation {
            id: EvaluationId::new(),
            owner,
            farm_id: new.farm_id,
            name: new.name,
            boundary: new.boundary,
            area: new.area,
            area_unit: new.area_unit,
            slope: new.slope,
            infrastructure: new.infrastructure,
            cost_estimate,
            cost_currency: new.cost_currency.unwrap_or_else(|| "INR".to_string()),
            status: EvaluationStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        self.store.create_evaluation(&evaluation).await?;
        tracing::info!(id = %evaluation.id, owner = %evaluation.owner, "Created site evaluation");
        Ok(evaluation)
    }

    pub async fn get(&self, owner: &OwnerId, id: EvaluationId) -> Result<SiteEvaluation> {
        self.store
            .get_evaluation(owner, id)
            .await?
            .ok_or_else(|| ForgeError::not_found("Site evaluation"))
    }

    pub async fn list(
        &self,
        owner: &OwnerId,
        farm: Option<FarmId>,
    ) -> Result<Vec<SiteEvaluation>> {
        self.store.list_evaluations(owner, farm).await
    }

    /// Apply a typed patch to a draft evaluation. A patch with no fields is
    /// a validation error.
    ///
    /// Touching area or infrastructure recomputes the estimate from the
    /// patched record; when no infrastructure is set the estimate is
    /// cleared rather than left stale.
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: EvaluationId,
        request: &UpdateEvaluationRequest,
    ) -> Result<SiteEvaluation> {
        let patch = Self::patch_from_request(request)?;
        if patch.is_empty() {
            return Err(ForgeError::validation("No fields to update"));
        }

        let existing = self.get(owner, id).await?;
        if existing.status == EvaluationStatus::Submitted {
            return Err(ForgeError::invalid_state(
                "Submitted evaluations can no longer be edited",
            ));
        }

        let recompute = patch.touches_cost_inputs();
        let mut updated = Self::apply_patch(existing, patch)?;

        if recompute {
            updated.cost_estimate = updated
                .infrastructure
                .map(|i| calculate_cost(updated.area, i))
                .transpose()?;
        }
        updated.updated_at = Utc::now();

        if !self.store.update_evaluation(&updated).await? {
            return Err(ForgeError::not_found("Site evaluation"));
        }
        tracing::info!(id = %updated.id, owner = %updated.owner, "Updated site evaluation");
        Ok(updated)
    }

    /// Move a draft to submitted. Submitting an already-submitted
    /// evaluation is a no-op; there is no path back to draft.
    pub async fn submit(&self, owner: &OwnerId, id: EvaluationId) -> Result<SiteEvaluation> {
        let mut evaluation = self.get(owner, id).await?;
        if evaluation.status == EvaluationStatus::Submitted {
            return Ok(evaluation);
        }

        evaluation.status = EvaluationStatus::Submitted;
        evaluation.updated_at = Utc::now();

        if !self.store.update_evaluation(&evaluation).await? {
            return Err(ForgeError::not_found("Site evaluation"));
        }
        tracing::info!(id = %evaluation.id, owner = %evaluation.owner, "Submitted site evaluation");
        Ok(evaluation)
    }

    pub async fn delete(&self, owner: &OwnerId, id: EvaluationId) -> Result<()> {
        if !self.store.delete_evaluation(owner, id).await? {
            return Err(ForgeError::not_found("Site evaluation"));
        }
        tracing::info!(id = %id, owner = %owner, "Deleted site evaluation");
        Ok(())
    }

    fn new_from_request(request: &CreateEvaluationRequest) -> Result<NewEvaluation> {
        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ForgeError::validation("Site name is required"))?
            .to_string();
        let area = request.area.ok_or_else(|| ForgeError::validation("Area is required"))?;
        Self::check_area(area)?;
        if let Some(slope) = request.slope {
            Self::check_slope(slope)?;
        }

        Ok(NewEvaluation {
            name,
            farm_id: request.farm_id,
            boundary: request.boundary.clone().unwrap_or_default(),
            area,
            area_unit: Self::parse_area_unit(request.area_unit.as_deref())?.unwrap_or_default(),
            slope: request.slope,
            infrastructure: Self::parse_infrastructure(
                request.infrastructure_recommendation.as_deref(),
            )?,
            cost_currency: request.cost_currency.clone(),
        })
    }

    fn patch_from_request(request: &UpdateEvaluationRequest) -> Result<EvaluationPatch> {
        if let Some(name) = request.name.as_deref() {
            if name.trim().is_empty() {
                return Err(ForgeError::validation("Site name must not be empty"));
            }
        }
        if let Some(area) = request.area {
            Self::check_area(area)?;
        }
        if let Some(slope) = request.slope {
            Self::check_slope(slope)?;
        }

        Ok(EvaluationPatch {
            name: request.name.as_deref().map(|n| n.trim().to_string()),
            farm_id: request.farm_id,
            boundary: request.boundary.clone(),
            area: request.area,
            area_unit: Self::parse_area_unit(request.area_unit.as_deref())?,
            slope: request.slope,
            infrastructure: Self::parse_infrastructure(
                request.infrastructure_recommendation.as_deref(),
            )?,
            cost_currency: request.cost_currency.clone(),
        })
    }

    fn apply_patch(
        mut evaluation: SiteEvaluation,
        patch: EvaluationPatch,
    ) -> Result<SiteEvaluation> {
        if let Some(boundary) = patch.boundary {
            validate_boundary(&boundary)?;
            evaluation.boundary = boundary;
        }
        if let Some(name) = patch.name {
            evaluation.name = name;
        }
        if let Some(farm_id) = patch.farm_id {
            evaluation.farm_id = Some(farm_id);
        }
        if let Some(area) = patch.area {
            evaluation.area = area;
        }
        if let Some(area_unit) = patch.area_unit {
            evaluation.area_unit = area_unit;
        }
        if let Some(slope) = patch.slope {
            evaluation.slope = Some(slope);
        }
        if let Some(infrastructure) = patch.infrastructure {
            evaluation.infrastructure = Some(infrastructure);
        }
        if let Some(cost_currency) = patch.cost_currency {
            evaluation.cost_currency = cost_currency;
        }
        Ok(evaluation)
    }

    fn check_area(area: f64) -> Result<()> {
        if !area.is_finite() || area < 0.0 {
            return Err(ForgeError::validation("Area must be a non-negative finite number"));
        }
        Ok(())
    }

    fn check_slope(slope: f64) -> Result<()> {
        if !slope.is_finite() || slope < 0.0 {
            return Err(ForgeError::validation("Slope must be a non-negative finite number"));
        }
        Ok(())
    }

    fn parse_area_unit(raw: Option<&str>) -> Result<Option<AreaUnit>> {
        raw.map(str::parse).transpose()
    }

    fn parse_infrastructure(raw: Option<&str>) -> Result<Option<InfrastructureType>> {
        raw.map(str::parse).transpose()
    }
}
