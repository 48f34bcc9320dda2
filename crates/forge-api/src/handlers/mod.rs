mod evaluations;
mod farms;
mod geometry;
mod health;
mod proposals;

pub use evaluations::{
    create_evaluation, delete_evaluation, get_evaluation, list_evaluations, submit_evaluation,
    update_evaluation,
};
pub use farms::{create_farm, delete_farm, get_farm, list_farms, update_farm};
pub use geometry::polygon_metrics;
pub use health::health_check;
pub use proposals::{
    create_proposal, get_proposal, get_proposal_pdf, list_proposals, update_proposal,
};
