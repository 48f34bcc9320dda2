use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{BoundaryPoint, FarmId, OwnerId};
use crate::cost::InfrastructureType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationId(pub Uuid);

impl EvaluationId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EvaluationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Unit the stored `area` value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "acres")]
    Acres,
    #[serde(rename = "sqmeters")]
    SquareMeters,
}

impl AreaUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Acres => "acres",
            Self::SquareMeters => "sq meters",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Acres => "acres",
            Self::SquareMeters => "sqmeters",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = crate::ForgeError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "acres" => Ok(Self::Acres),
            "sqmeters" => Ok(Self::SquareMeters),
            other => Err(crate::ForgeError::validation(format!(
                "Invalid area unit: {other}"
            ))),
        }
    }
}

/// Lifecycle status of a site evaluation.
///
/// The only defined transition is `Draft -> Submitted`; there is no path
/// back. Submitted evaluations are read-only apart from proposal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    #[default]
    Draft,
    Submitted,
}

impl EvaluationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted site evaluation: a land boundary, its measured area, the
/// recommended infrastructure, and the server-derived cost estimate.
///
/// `cost_estimate` is never accepted from a client. It is recomputed from
/// `area` and `infrastructure` whenever either changes, and cleared when no
/// infrastructure recommendation is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteEvaluation {
    pub id: EvaluationId,
    pub owner: OwnerId,
    pub farm_id: Option<FarmId>,
    pub name: String,
    pub boundary: Vec<BoundaryPoint>,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub slope: Option<f64>,
    pub infrastructure: Option<InfrastructureType>,
    pub cost_estimate: Option<i64>,
    pub cost_currency: String,
    pub status: EvaluationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new evaluation.
#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub name: String,
    pub farm_id: Option<FarmId>,
    pub boundary: Vec<BoundaryPoint>,
    pub area: f64,
    pub area_unit: AreaUnit,
    pub slope: Option<f64>,
    pub infrastructure: Option<InfrastructureType>,
    pub cost_currency: Option<String>,
}

/// Explicit patch of the mutable evaluation fields.
///
/// This is the complete set of client-writable fields. Cost and status are
/// deliberately absent: cost is always derived server-side and status moves
/// only through the submit operation.
#[derive(Debug, Clone, Default)]
pub struct EvaluationPatch {
    pub name: Option<String>,
    pub farm_id: Option<FarmId>,
    pub boundary: Option<Vec<BoundaryPoint>>,
    pub area: Option<f64>,
    pub area_unit: Option<AreaUnit>,
    pub slope: Option<f64>,
    pub infrastructure: Option<InfrastructureType>,
    pub cost_currency: Option<String>,
}

impl EvaluationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.farm_id.is_none()
            && self.boundary.is_none()
            && self.area.is_none()
            && self.area_unit.is_none()
            && self.slope.is_none()
            && self.infrastructure.is_none()
            && self.cost_currency.is_none()
    }

    /// Whether applying this patch must trigger a cost recomputation.
    pub fn touches_cost_inputs(&self) -> bool {
        self.area.is_some() || self.infrastructure.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty_and_touches_nothing() {
        let patch = EvaluationPatch::default();
        assert!(patch.is_empty());
        assert!(!patch.touches_cost_inputs());
    }

    #[test]
    fn any_field_makes_the_patch_non_empty() {
        let patch = EvaluationPatch { name: Some("plot".to_string()), ..Default::default() };
        assert!(!patch.is_empty());
        assert!(!patch.touches_cost_inputs());

        let patch = EvaluationPatch { area: Some(2.0), ..Default::default() };
        assert!(!patch.is_empty());
        assert!(patch.touches_cost_inputs());
    }
}
