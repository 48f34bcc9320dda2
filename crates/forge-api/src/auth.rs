//! Owner identity extraction.
//!
//! Authentication happens upstream of this service; requests arrive with
//! the already-resolved principal in the `X-Owner-Id` header. Handlers take
//! an [`Owner`] argument and every store call is scoped by it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use forge_core::models::OwnerId;

use crate::error::ApiError;

const OWNER_HEADER: &str = "x-owner-id";

/// The requesting principal, extracted from `X-Owner-Id`.
#[derive(Debug, Clone)]
pub struct Owner(pub OwnerId);

impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Owner(OwnerId::new(value)))
            .ok_or_else(|| ApiError::unauthorized("Missing X-Owner-Id header"))
    }
}
