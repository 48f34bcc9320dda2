//! In-memory storage implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock
//! poisoning only occurs when another thread panicked while holding the
//! lock, which is an unrecoverable state. For production workloads, use the
//! PostgreSQL backend.

use async_trait::async_trait;
use forge_core::error::Result;
use forge_core::models::{
    EvaluationId, Farm, FarmId, OwnerId, Proposal, ProposalId, SiteEvaluation,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{EvaluationStore, FarmStore, ProposalStore};

/// In-memory implementation of FarmStore
#[derive(Debug, Clone, Default)]
pub struct MemoryFarmStore {
    farms: Arc<RwLock<HashMap<FarmId, Farm>>>,
}

impl MemoryFarmStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FarmStore for MemoryFarmStore {
    async fn create_farm(&self, farm: &Farm) -> Result<()> {
        let mut farms = self.farms.write().unwrap();
        farms.insert(farm.id, farm.clone());
        Ok(())
    }

    async fn get_farm(&self, owner: &OwnerId, id: FarmId) -> Result<Option<Farm>> {
        let farms = self.farms.read().unwrap();
        Ok(farms.get(&id).filter(|f| &f.owner == owner).cloned())
    }

    async fn list_farms(&self, owner: &OwnerId) -> Result<Vec<Farm>> {
        let farms = self.farms.read().unwrap();
        let mut owned: Vec<Farm> =
            farms.values().filter(|f| &f.owner == owner).cloned().collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update_farm(&self, farm: &Farm) -> Result<bool> {
        let mut farms = self.farms.write().unwrap();
        match farms.get(&farm.id) {
            Some(existing) if existing.owner == farm.owner => {
                farms.insert(farm.id, farm.clone());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_farm(&self, owner: &OwnerId, id: FarmId) -> Result<bool> {
        let mut farms = self.farms.write().unwrap();
        match farms.get(&id) {
            Some(existing) if &existing.owner == owner => {
                farms.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// In-memory implementation of EvaluationStore
#[derive(Debug, Clone, Default)]
pub struct MemoryEvaluationStore {
    evaluations: Arc<RwLock<HashMap<EvaluationId, SiteEvaluation>>>,
}

impl MemoryEvaluationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EvaluationStore for MemoryEvaluationStore {
    async fn create_evaluation(&self, evaluation: &SiteEvaluation) -> Result<()> {
        let mut evaluations = self.evaluations.write().unwrap();
        evaluations.insert(evaluation.id, evaluation.clone());
        Ok(())
    }

    async fn get_evaluation(
        &self,
        owner: &OwnerId,
        id: EvaluationId,
    ) -> Result<Option<SiteEvaluation>> {
        let evaluations = self.evaluations.read().unwrap();
        Ok(evaluations.get(&id).filter(|e| &e.owner == owner).cloned())
    }

    async fn list_evaluations(
        &self,
        owner: &OwnerId,
        farm: Option<FarmId>,
    ) -> Result<Vec<SiteEvaluation>> {
        let evaluations = self.evaluations.read().unwrap();
        let mut owned: Vec<SiteEvaluation> = evaluations
            .values()
            .filter(|e| &e.owner == owner)
            .filter(|e| farm.is_none() || e.farm_id == farm)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    async fn update_evaluation(&self, evaluation: &SiteEvaluation) -> Result<bool> {
        let mut evaluations = self.evaluations.write().unwrap();
        match evaluations.get(&evaluation.id) {
            Some(existing) if existing.owner == evaluation.owner => {
                evaluations.insert(evaluation.id, evaluation.clone());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_evaluation(&self, owner: &OwnerId, id: EvaluationId) -> Result<bool> {
        let mut evaluations = self.evaluations.write().unwrap();
        match evaluations.get(&id) {
            Some(existing) if &existing.owner == owner => {
                evaluations.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// In-memory implementation of ProposalStore
#[derive(Debug, Clone, Default)]
pub struct MemoryProposalStore {
    proposals: Arc<RwLock<HashMap<ProposalId, Proposal>>>,
}

impl MemoryProposalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProposalStore for MemoryProposalStore {
    async fn create_proposal(&self, proposal: &Proposal) -> Result<()> {
        let mut proposals = self.proposals.write().unwrap();
        proposals.insert(proposal.id, proposal.clone());
        Ok(())
    }

    async fn get_proposal(&self, owner: &OwnerId, id: ProposalId) -> Result<Option<Proposal>> {
        let proposals = self.proposals.read().unwrap();
        Ok(proposals.get(&id).filter(|p| &p.owner == owner).cloned())
    }

    async fn list_proposals(&self, owner: &OwnerId) -> Result<Vec<Proposal>> {
        let proposals = self.proposals.read().unwrap();
        let mut owned: Vec<Proposal> =
            proposals.values().filter(|p| &p.owner == owner).cloned().collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update_proposal(&self, proposal: &Proposal) -> Result<bool> {
        let mut proposals = self.proposals.write().unwrap();
        match proposals.get(&proposal.id) {
            Some(existing) if existing.owner == proposal.owner => {
                proposals.insert(proposal.id, proposal.clone());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use forge_core::models::{AreaUnit, EvaluationStatus};

    fn farm(owner: &str, name: &str) -> Farm {
        let now = Utc::now();
        Farm {
            id: FarmId::new(),
            owner: OwnerId::new(owner),
            name: name.to_string(),
            description: None,
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn evaluation(owner: &str, name: &str) -> SiteEvaluation {
        let now = Utc::now();
        SiteEvaluation {
            id: EvaluationId::new(),
            owner: OwnerId::new(owner),
            farm_id: None,
            name: name.to_string(),
            boundary: Vec::new(),
            area: 2.0,
            area_unit: AreaUnit::Acres,
            slope: None,
            infrastructure: None,
            cost_estimate: None,
            cost_currency: "INR".to_string(),
            status: EvaluationStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn farm_reads_are_owner_scoped() {
        let store = MemoryFarmStore::new();
        let f = farm("alice", "North Field");
        store.create_farm(&f).await.unwrap();

        let alice = OwnerId::new("alice");
        let bob = OwnerId::new("bob");
        assert!(store.get_farm(&alice, f.id).await.unwrap().is_some());
        assert!(store.get_farm(&bob, f.id).await.unwrap().is_none());
        assert!(!store.delete_farm(&bob, f.id).await.unwrap());
        assert!(store.delete_farm(&alice, f.id).await.unwrap());
    }

    #[tokio::test]
    async fn evaluations_list_newest_update_first() {
        let store = MemoryEvaluationStore::new();
        let owner = OwnerId::new("alice");

        let mut older = evaluation("alice", "first");
        older.updated_at = Utc::now() - Duration::hours(1);
        let newer = evaluation("alice", "second");
        store.create_evaluation(&older).await.unwrap();
        store.create_evaluation(&newer).await.unwrap();
        store.create_evaluation(&evaluation("bob", "other")).await.unwrap();

        let listed = store.list_evaluations(&owner, None).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "second");
        assert_eq!(listed[1].name, "first");
    }

    #[tokio::test]
    async fn evaluations_filter_by_farm() {
        let store = MemoryEvaluationStore::new();
        let owner = OwnerId::new("alice");
        let farm_id = FarmId::new();

        let mut on_farm = evaluation("alice", "on farm");
        on_farm.farm_id = Some(farm_id);
        store.create_evaluation(&on_farm).await.unwrap();
        store.create_evaluation(&evaluation("alice", "loose")).await.unwrap();

        let listed = store.list_evaluations(&owner, Some(farm_id)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "on farm");
    }

    #[tokio::test]
    async fn update_refuses_foreign_records() {
        let store = MemoryEvaluationStore::new();
        let e = evaluation("alice", "mine");
        store.create_evaluation(&e).await.unwrap();

        let mut stolen = e.clone();
        stolen.owner = OwnerId::new("bob");
        stolen.name = "yours now".to_string();
        assert!(!store.update_evaluation(&stolen).await.unwrap());

        let kept = store
            .get_evaluation(&OwnerId::new("alice"), e.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kept.name, "mine");
    }
}
