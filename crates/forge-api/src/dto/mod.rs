mod request;
mod response;

pub use request::{
    CreateEvaluationRequest, CreateFarmRequest, CreateProposalRequest, ListEvaluationsQuery,
    PolygonMetricsRequest, UpdateEvaluationRequest, UpdateFarmRequest, UpdateProposalRequest,
};
pub use response::{
    DeleteResponse, EvaluationResponse, FarmResponse, HealthResponse, ProposalResponse,
};
