mod evaluations;
mod proposals;

pub use evaluations::EvaluationService;
pub use proposals::{ProposalService, RenderedProposal};
