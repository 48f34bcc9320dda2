use serde::{Deserialize, Serialize};

/// One vertex of a land-boundary polygon.
///
/// Order matters: the sequence of points defines the ring, closed implicitly
/// from the last point back to the first. The `id` is a synthetic per-point
/// identifier used by drawing surfaces for list operations; it plays no role
/// in geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub lat: f64,
    pub lng: f64,
    pub id: String,
}

impl BoundaryPoint {
    pub fn new(lat: f64, lng: f64, id: impl Into<String>) -> Self {
        Self { lat, lng, id: id.into() }
    }
}
