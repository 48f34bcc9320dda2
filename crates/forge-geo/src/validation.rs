//! Boundary coordinate validation.
//!
//! The measurement code itself is pure arithmetic and propagates whatever
//! it is given; anything that persists or measures client-supplied
//! boundaries goes through here first.

use forge_core::models::BoundaryPoint;
use forge_core::{ForgeError, Result};

/// Validate every point of a boundary: coordinates must be finite and
/// within `-90..=90` latitude, `-180..=180` longitude. The first offending
/// point is reported by index.
pub fn validate_boundary(boundary: &[BoundaryPoint]) -> Result<()> {
    for (i, point) in boundary.iter().enumerate() {
        if !point.lat.is_finite() || !point.lng.is_finite() {
            return Err(ForgeError::validation(format!(
                "Boundary point {i}: coordinates must be finite"
            )));
        }
        if !(-90.0..=90.0).contains(&point.lat) {
            return Err(ForgeError::validation(format!(
                "Boundary point {i}: latitude {} out of range [-90, 90]",
                point.lat
            )));
        }
        if !(-180.0..=180.0).contains(&point.lng) {
            return Err(ForgeError::validation(format!(
                "Boundary point {i}: longitude {} out of range [-180, 180]",
                point.lng
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> BoundaryPoint {
        BoundaryPoint::new(lat, lng, "p")
    }

    #[test]
    fn empty_boundary_is_valid() {
        assert!(validate_boundary(&[]).is_ok());
    }

    #[test]
    fn in_range_points_pass() {
        let boundary = [pt(12.97, 77.59), pt(-45.0, 180.0), pt(90.0, -180.0)];
        assert!(validate_boundary(&boundary).is_ok());
    }

    #[test]
    fn out_of_range_latitude_is_reported_by_index() {
        let boundary = [pt(0.0, 0.0), pt(91.0, 0.0)];
        let err = validate_boundary(&boundary).unwrap_err();
        assert!(err.to_string().contains("point 1"), "{err}");
    }

    #[test]
    fn out_of_range_longitude_fails() {
        assert!(validate_boundary(&[pt(0.0, 180.5)]).is_err());
    }

    #[test]
    fn non_finite_coordinates_fail() {
        assert!(validate_boundary(&[pt(f64::NAN, 0.0)]).is_err());
        assert!(validate_boundary(&[pt(0.0, f64::INFINITY)]).is_err());
    }
}
