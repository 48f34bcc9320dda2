//! Domain model types

mod boundary;
mod evaluation;
mod farm;
mod proposal;

pub use boundary::BoundaryPoint;
pub use evaluation::{
    AreaUnit, EvaluationId, EvaluationPatch, EvaluationStatus, NewEvaluation, SiteEvaluation,
};
pub use farm::{Farm, FarmId};
pub use proposal::{Proposal, ProposalId, ProposalStatus};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the principal that owns a record.
///
/// Authentication lives outside this service; handlers receive the owner id
/// already resolved. Every store lookup is scoped by it, so a record that
/// belongs to someone else is indistinguishable from one that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
