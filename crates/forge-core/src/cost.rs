//! Cost engine: deterministic cost estimation from an area and a closed
//! set of infrastructure categories.
//!
//! Rates are fixed per-acre constants in the proposal currency (INR). The
//! engine is pure: it either returns a rounded integer estimate or fails
//! with a validation error, never a partial result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ForgeError, Result};

/// Closed enumeration of supported farm-infrastructure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfrastructureType {
    Polyhouse,
    #[serde(rename = "Shade Net")]
    ShadeNet,
    #[serde(rename = "Open Field")]
    OpenField,
}

impl InfrastructureType {
    pub const ALL: [InfrastructureType; 3] =
        [Self::Polyhouse, Self::ShadeNet, Self::OpenField];

    /// Fixed cost per acre for this category.
    pub fn rate_per_acre(self) -> f64 {
        match self {
            Self::Polyhouse => 800_000.0,
            Self::ShadeNet => 400_000.0,
            Self::OpenField => 150_000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polyhouse => "Polyhouse",
            Self::ShadeNet => "Shade Net",
            Self::OpenField => "Open Field",
        }
    }
}

impl fmt::Display for InfrastructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfrastructureType {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Polyhouse" => Ok(Self::Polyhouse),
            "Shade Net" => Ok(Self::ShadeNet),
            "Open Field" => Ok(Self::OpenField),
            other => Err(ForgeError::validation(format!(
                "Invalid infrastructure type: {other}"
            ))),
        }
    }
}

/// Compute the cost estimate for `area` acres of `infrastructure`.
///
/// Fails with a validation error when the area is negative or non-finite.
pub fn calculate_cost(area: f64, infrastructure: InfrastructureType) -> Result<i64> {
    if !area.is_finite() {
        return Err(ForgeError::validation("Area must be a finite number"));
    }
    if area < 0.0 {
        return Err(ForgeError::validation("Area must be >= 0"));
    }
    Ok((area * infrastructure.rate_per_acre()).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_costs_nothing() {
        for ty in InfrastructureType::ALL {
            assert_eq!(calculate_cost(0.0, ty).unwrap(), 0);
        }
    }

    #[test]
    fn negative_area_is_rejected() {
        let err = calculate_cost(-1.0, InfrastructureType::Polyhouse).unwrap_err();
        assert!(matches!(err, ForgeError::Validation { .. }));
    }

    #[test]
    fn non_finite_area_is_rejected() {
        assert!(calculate_cost(f64::NAN, InfrastructureType::ShadeNet).is_err());
        assert!(calculate_cost(f64::INFINITY, InfrastructureType::OpenField).is_err());
    }

    #[test]
    fn four_acres_of_polyhouse() {
        assert_eq!(
            calculate_cost(4.0, InfrastructureType::Polyhouse).unwrap(),
            3_200_000
        );
    }

    #[test]
    fn six_acres_of_shade_net() {
        assert_eq!(
            calculate_cost(6.0, InfrastructureType::ShadeNet).unwrap(),
            2_400_000
        );
    }

    #[test]
    fn fractional_areas_round_to_nearest() {
        // 2.5 acres of Open Field: 375,000 exactly
        assert_eq!(
            calculate_cost(2.5, InfrastructureType::OpenField).unwrap(),
            375_000
        );
    }

    #[test]
    fn unknown_category_fails_to_parse() {
        let err = "Greenhouse".parse::<InfrastructureType>().unwrap_err();
        assert!(matches!(err, ForgeError::Validation { .. }));
    }

    #[test]
    fn wire_names_round_trip() {
        for ty in InfrastructureType::ALL {
            assert_eq!(ty.as_str().parse::<InfrastructureType>().unwrap(), ty);
        }
    }
}
