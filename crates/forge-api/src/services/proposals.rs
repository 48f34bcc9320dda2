//! Proposal records and PDF rendering.

use std::sync::Arc;

use chrono::Utc;
use forge_core::models::{
    EvaluationId, OwnerId, Proposal, ProposalId, ProposalStatus, SiteEvaluation,
};
use forge_core::{ForgeError, Result};
use forge_store::ports::{EvaluationStore, FarmStore, ProposalStore};

use crate::dto::{CreateProposalRequest, UpdateProposalRequest};

pub struct ProposalService {
    proposals: Arc<dyn ProposalStore>,
    evaluations: Arc<dyn EvaluationStore>,
    farms: Arc<dyn FarmStore>,
}

/// A rendered proposal document ready for download.
#[derive(Debug)]
pub struct RenderedProposal {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ProposalService {
    pub fn new(
        proposals: Arc<dyn ProposalStore>,
        evaluations: Arc<dyn EvaluationStore>,
        farms: Arc<dyn FarmStore>,
    ) -> Self {
        Self { proposals, evaluations, farms }
    }

    pub async fn create(
        &self,
        owner: OwnerId,
        request: &CreateProposalRequest,
    ) -> Result<Proposal> {
        let title = request
            .title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .ok_or_else(|| ForgeError::validation("Title is required"))?;
        let evaluation_id = request
            .site_evaluation_id
            .as_deref()
            .ok_or_else(|| ForgeError::validation("siteEvaluationId is required"))?
            .parse::<EvaluationId>()
            .map_err(|_| ForgeError::validation("Invalid siteEvaluationId format"))?;

        // The referenced evaluation must exist in the caller's scope.
        let evaluation = self.evaluation(&owner, evaluation_id).await?;

        let now = Utc::now();
        let proposal = Proposal {
            id: ProposalId::new(),
            owner,
            evaluation_id: evaluation.id,
            title: title.to_string(),
            content: request.content.clone().unwrap_or_else(|| serde_json::json!({})),
            status: ProposalStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        self.proposals.create_proposal(&proposal).await?;
        tracing::info!(id = %proposal.id, owner = %proposal.owner, "Created proposal");
        Ok(proposal)
    }

    pub async fn get(&self, owner: &OwnerId, id: ProposalId) -> Result<Proposal> {
        self.proposals
            .get_proposal(owner, id)
            .await?
            .ok_or_else(|| ForgeError::not_found("Proposal"))
    }

    pub async fn list(&self, owner: &OwnerId) -> Result<Vec<Proposal>> {
        self.proposals.list_proposals(owner).await
    }

    pub async fn update(
        &self,
        owner: &OwnerId,
        id: ProposalId,
        request: &UpdateProposalRequest,
    ) -> Result<Proposal> {
        let mut proposal = self.get(owner, id).await?;

        if let Some(title) = request.title.as_deref() {
            let title = title.trim();
            if title.is_empty() {
                return Err(ForgeError::validation("Title must not be empty"));
            }
            proposal.title = title.to_string();
        }
        if let Some(content) = &request.content {
            proposal.content = content.clone();
        }
        if let Some(status) = request.status.as_deref() {
            proposal.status = status.parse()?;
        }
        proposal.updated_at = Utc::now();

        if !self.proposals.update_proposal(&proposal).await? {
            return Err(ForgeError::not_found("Proposal"));
        }
        Ok(proposal)
    }

    /// Render the proposal PDF for a submitted evaluation. The renderer
    /// itself rejects drafts.
    pub async fn render_pdf(
        &self,
        owner: &OwnerId,
        evaluation_id: EvaluationId,
    ) -> Result<RenderedProposal> {
        let evaluation = self.evaluation(owner, evaluation_id).await?;

        let farm_name = match evaluation.farm_id {
            Some(farm_id) => {
                self.farms.get_farm(owner, farm_id).await?.map(|farm| farm.name)
            }
            None => None,
        };

        let bytes = forge_proposal::render_pdf(&evaluation, farm_name.as_deref())?;
        tracing::info!(evaluation = %evaluation.id, owner = %owner, "Rendered proposal PDF");
        Ok(RenderedProposal {
            filename: forge_proposal::proposal_filename(&evaluation.name),
            bytes,
        })
    }

    async fn evaluation(&self, owner: &OwnerId, id: EvaluationId) -> Result<SiteEvaluation> {
        self.evaluations
            .get_evaluation(owner, id)
            .await?
            .ok_or_else(|| ForgeError::not_found("Site evaluation"))
    }
}
