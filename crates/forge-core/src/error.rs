//! Error types for Forge

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    // Invalid or missing input
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    // Record absent in the caller's owned scope
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    // Operation disallowed for the record's current status
    #[error("{reason}")]
    InvalidState { reason: String },

    // Persistence backend failures
    #[error("Storage error: {0}")]
    Storage(String),

    // Proposal document generation failures
    #[error("Proposal rendering failed: {0}")]
    Render(String),
}

impl ForgeError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation { reason: reason.into() }
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;
