use async_trait::async_trait;
use forge_core::error::Result;
use forge_core::models::{
    EvaluationId, Farm, FarmId, OwnerId, Proposal, ProposalId, SiteEvaluation,
};

/// Port for farm persistence.
///
/// Every read is scoped by owner: a record owned by someone else behaves
/// exactly like a missing record. Updates and deletes report whether a row
/// was actually touched so callers can surface `NotFound`.
#[async_trait]
pub trait FarmStore: Send + Sync {
    /// Persist a new farm.
    async fn create_farm(&self, farm: &Farm) -> Result<()>;

    /// Fetch one farm in the owner's scope.
    async fn get_farm(&self, owner: &OwnerId, id: FarmId) -> Result<Option<Farm>>;

    /// All farms of the owner, newest first.
    async fn list_farms(&self, owner: &OwnerId) -> Result<Vec<Farm>>;

    /// Overwrite a farm record; `false` when it is absent in scope.
    async fn update_farm(&self, farm: &Farm) -> Result<bool>;

    /// Delete a farm; `false` when it is absent in scope.
    async fn delete_farm(&self, owner: &OwnerId, id: FarmId) -> Result<bool>;
}

/// Port for site-evaluation persistence.
///
/// Updates replace the whole record in a single write; there is no partial
/// field merge at this layer, so a failed upstream computation never leaves
/// a half-written record behind. Concurrent writers race with
/// last-write-wins semantics.
#[async_trait]
pub trait EvaluationStore: Send + Sync {
    /// Persist a new evaluation.
    async fn create_evaluation(&self, evaluation: &SiteEvaluation) -> Result<()>;

    /// Fetch one evaluation in the owner's scope.
    async fn get_evaluation(
        &self,
        owner: &OwnerId,
        id: EvaluationId,
    ) -> Result<Option<SiteEvaluation>>;

    /// The owner's evaluations, optionally filtered by farm, most recently
    /// updated first.
    async fn list_evaluations(
        &self,
        owner: &OwnerId,
        farm: Option<FarmId>,
    ) -> Result<Vec<SiteEvaluation>>;

    /// Overwrite an evaluation record; `false` when it is absent in scope.
    async fn update_evaluation(&self, evaluation: &SiteEvaluation) -> Result<bool>;

    /// Delete an evaluation; `false` when it is absent in scope.
    async fn delete_evaluation(&self, owner: &OwnerId, id: EvaluationId) -> Result<bool>;
}

/// Port for proposal persistence.
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Persist a new proposal.
    async fn create_proposal(&self, proposal: &Proposal) -> Result<()>;

    /// Fetch one proposal in the owner's scope.
    async fn get_proposal(&self, owner: &OwnerId, id: ProposalId) -> Result<Option<Proposal>>;

    /// The owner's proposals, newest first.
    async fn list_proposals(&self, owner: &OwnerId) -> Result<Vec<Proposal>>;

    /// Overwrite a proposal record; `false` when it is absent in scope.
    async fn update_proposal(&self, proposal: &Proposal) -> Result<bool>;
}
