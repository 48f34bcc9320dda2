//! Core domain types for Forge: site evaluations, farms, proposals,
//! the infrastructure cost engine, and the shared error taxonomy.

pub mod cost;
pub mod error;
pub mod models;

pub use error::{ForgeError, Result};
