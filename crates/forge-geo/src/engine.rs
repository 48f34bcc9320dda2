//! Polygon metrics over a chosen map provider.

use std::sync::Arc;

use forge_core::models::BoundaryPoint;
use serde::Serialize;

use crate::provider::{LatLng, MapProvider, OpenStreetMap};

/// One international acre in square meters. The single authoritative
/// conversion constant for the whole system.
pub const SQUARE_METERS_PER_ACRE: f64 = 4046.8564224;

/// A measured value with its display unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: &'static str,
}

/// Measurements of one boundary polygon.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonMetrics {
    pub area_sq_meters: f64,
    pub area_acres: f64,
    pub perimeter_meters: f64,
    pub formatted_area: Quantity,
    pub formatted_perimeter: Quantity,
    pub provider: &'static str,
}

/// Geometry engine bound to one [`MapProvider`] strategy.
///
/// The provider is chosen when the engine is constructed; services that
/// need a different backend construct a different engine.
#[derive(Clone)]
pub struct GeometryEngine {
    provider: Arc<dyn MapProvider>,
}

impl GeometryEngine {
    pub fn new(provider: Arc<dyn MapProvider>) -> Self {
        Self { provider }
    }

    /// Engine over the default OpenStreetMap provider.
    pub fn osm() -> Self {
        Self::new(Arc::new(OpenStreetMap))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Area of the closed polygon in square meters.
    pub fn compute_area(&self, polygon: &[BoundaryPoint]) -> f64 {
        self.provider.area(polygon)
    }

    /// Perimeter of the closed polygon in meters.
    pub fn compute_perimeter(&self, polygon: &[BoundaryPoint]) -> f64 {
        self.provider.perimeter(polygon)
    }

    /// Great-circle distance between two coordinates in meters.
    pub fn calculate_distance(&self, from: LatLng, to: LatLng) -> f64 {
        self.provider.distance(from, to)
    }

    /// Full measurement bundle for one polygon.
    pub fn polygon_metrics(&self, polygon: &[BoundaryPoint]) -> PolygonMetrics {
        let area_sq_meters = self.compute_area(polygon);
        let perimeter_meters = self.compute_perimeter(polygon);

        PolygonMetrics {
            area_sq_meters,
            area_acres: sq_meters_to_acres(area_sq_meters),
            perimeter_meters,
            formatted_area: format_area(area_sq_meters),
            formatted_perimeter: format_distance(perimeter_meters),
            provider: self.provider.name(),
        }
    }
}

pub fn sq_meters_to_acres(sq_meters: f64) -> f64 {
    sq_meters / SQUARE_METERS_PER_ACRE
}

/// Acres with two decimals for parcels of at least an acre, rounded square
/// meters below that.
pub fn format_area(sq_meters: f64) -> Quantity {
    let acres = sq_meters_to_acres(sq_meters);
    if acres >= 1.0 {
        Quantity { value: (acres * 100.0).round() / 100.0, unit: "acres" }
    } else {
        Quantity { value: sq_meters.round(), unit: "sq m" }
    }
}

/// Kilometers with two decimals from one kilometer up, rounded meters below.
pub fn format_distance(meters: f64) -> Quantity {
    if meters >= 1000.0 {
        Quantity { value: (meters / 1000.0 * 100.0).round() / 100.0, unit: "km" }
    } else {
        Quantity { value: meters.round(), unit: "m" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pt(lat: f64, lng: f64) -> BoundaryPoint {
        BoundaryPoint::new(lat, lng, "p")
    }

    #[test]
    fn acre_conversion_uses_the_authoritative_constant() {
        assert!((sq_meters_to_acres(4046.8564224) - 1.0).abs() < 1e-12);
        assert!((sq_meters_to_acres(1_000_000.0) - 247.105381).abs() < 1e-6);
    }

    #[test]
    fn area_formatting_switches_units_at_one_acre() {
        let small = format_area(2_000.0);
        assert_eq!(small.unit, "sq m");
        assert_eq!(small.value, 2_000.0);

        let large = format_area(10_000.0);
        assert_eq!(large.unit, "acres");
        assert!((large.value - 2.47).abs() < 1e-9);
    }

    #[test]
    fn distance_formatting_switches_units_at_one_km() {
        assert_eq!(format_distance(999.4), Quantity { value: 999.0, unit: "m" });
        assert_eq!(format_distance(1_250.0), Quantity { value: 1.25, unit: "km" });
    }

    #[test]
    fn metrics_bundle_carries_the_provider_name() {
        let engine = GeometryEngine::osm();
        let metrics = engine.polygon_metrics(&[
            pt(0.0, 0.0),
            pt(0.0, 0.01),
            pt(0.01, 0.01),
            pt(0.01, 0.0),
        ]);
        assert_eq!(metrics.provider, "OpenStreetMap");
        assert!(metrics.area_sq_meters > 0.0);
        assert!(metrics.perimeter_meters > 0.0);
        assert!(
            (metrics.area_acres - sq_meters_to_acres(metrics.area_sq_meters)).abs() < 1e-9
        );
    }

    proptest! {
        // Any in-range boundary yields finite, non-negative measurements.
        #[test]
        fn area_and_perimeter_are_finite_and_non_negative(
            points in prop::collection::vec((-80.0f64..80.0, -179.0f64..179.0), 0..12)
        ) {
            let boundary: Vec<BoundaryPoint> = points
                .iter()
                .enumerate()
                .map(|(i, (lat, lng))| BoundaryPoint::new(*lat, *lng, format!("p{i}")))
                .collect();

            let engine = GeometryEngine::osm();
            let area = engine.compute_area(&boundary);
            let perimeter = engine.compute_perimeter(&boundary);

            prop_assert!(area.is_finite());
            prop_assert!(area >= 0.0);
            prop_assert!(perimeter.is_finite());
            prop_assert!(perimeter >= 0.0);

            if boundary.len() < 3 {
                prop_assert_eq!(area, 0.0);
            }
            if boundary.len() < 2 {
                prop_assert_eq!(perimeter, 0.0);
            }
        }
    }
}
