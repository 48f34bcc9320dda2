use std::sync::Arc;

use forge_geo::GeometryEngine;
use forge_store::ports::{EvaluationStore, FarmStore, ProposalStore};

#[derive(Clone)]
pub struct AppState {
    pub farm_store: Arc<dyn FarmStore>,
    pub evaluation_store: Arc<dyn EvaluationStore>,
    pub proposal_store: Arc<dyn ProposalStore>,
    pub geometry: GeometryEngine,
}

impl AppState {
    pub fn new(
        farm_store: Arc<dyn FarmStore>,
        evaluation_store: Arc<dyn EvaluationStore>,
        proposal_store: Arc<dyn ProposalStore>,
        geometry: GeometryEngine,
    ) -> Self {
        Self { farm_store, evaluation_store, proposal_store, geometry }
    }
}
