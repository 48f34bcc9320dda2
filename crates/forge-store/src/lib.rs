//! Storage backends for Forge records.
//!
//! [`ports`] defines the narrow async traits the service layer depends on;
//! [`memory`] backs them with in-process maps for development and tests;
//! [`postgres`] is the production adapter.

pub mod memory;
pub mod ports;
pub mod postgres;

pub use memory::{MemoryEvaluationStore, MemoryFarmStore, MemoryProposalStore};
pub use ports::{EvaluationStore, FarmStore, ProposalStore};
pub use postgres::{PostgresConfig, PostgresStore};
