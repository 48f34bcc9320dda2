//! Map-provider strategy: tile access and spherical measurement.
//!
//! Providers are plain strategy objects handed to [`GeometryEngine`] at
//! construction; there is no process-wide current provider. Swapping in an
//! alternative GIS backend means implementing [`MapProvider`] and passing
//! it in.
//!
//! [`GeometryEngine`]: crate::engine::GeometryEngine

use std::sync::Arc;

use forge_core::models::BoundaryPoint;

/// Earth's mean radius in meters, shared by every spherical formula here.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<&BoundaryPoint> for LatLng {
    fn from(p: &BoundaryPoint) -> Self {
        Self { lat: p.lat, lng: p.lng }
    }
}

/// Measurement and tile strategy for one map backend.
pub trait MapProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Slippy-map tile URL for the given tile coordinates.
    fn tile_url(&self, x: u32, y: u32, z: u32) -> String;

    /// Area of the closed polygon in square meters. Fewer than 3 points
    /// yields 0.
    fn area(&self, polygon: &[BoundaryPoint]) -> f64;

    /// Perimeter of the closed polygon in meters, including the implicit
    /// closing edge. Fewer than 2 points yields 0.
    fn perimeter(&self, polygon: &[BoundaryPoint]) -> f64;

    /// Great-circle distance between two coordinates in meters.
    fn distance(&self, from: LatLng, to: LatLng) -> f64;
}

/// Default provider: OpenStreetMap tiles with spherical-Earth measurement.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenStreetMap;

impl MapProvider for OpenStreetMap {
    fn name(&self) -> &'static str {
        "OpenStreetMap"
    }

    fn tile_url(&self, x: u32, y: u32, z: u32) -> String {
        format!("https://tile.openstreetmap.org/{z}/{x}/{y}.png")
    }

    fn area(&self, polygon: &[BoundaryPoint]) -> f64 {
        if polygon.len() < 3 {
            return 0.0;
        }

        // Geodesic shoelace: sum dLng * (2 + sin(lat1) + sin(lat2)) over the
        // closed ring, scaled by R^2 / 2. Winding direction only flips the
        // sign, hence the absolute value.
        let n = polygon.len();
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let lat1 = polygon[i].lat.to_radians();
            let lat2 = polygon[j].lat.to_radians();
            let d_lng = (polygon[j].lng - polygon[i].lng).to_radians();
            sum += d_lng * (2.0 + lat1.sin() + lat2.sin());
        }

        (sum * EARTH_RADIUS_METERS * EARTH_RADIUS_METERS / 2.0).abs()
    }

    fn perimeter(&self, polygon: &[BoundaryPoint]) -> f64 {
        if polygon.len() < 2 {
            return 0.0;
        }

        let n = polygon.len();
        let mut perimeter = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            perimeter += self.distance((&polygon[i]).into(), (&polygon[j]).into());
        }
        perimeter
    }

    fn distance(&self, from: LatLng, to: LatLng) -> f64 {
        // Haversine over the mean-radius sphere.
        let d_lat = (to.lat - from.lat).to_radians();
        let d_lng = (to.lng - from.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + from.lat.to_radians().cos()
                * to.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }
}

/// Look up a provider by its configured name. Unknown names yield `None`;
/// callers decide whether that is a hard error or a fallback to the default.
pub fn provider_by_name(name: &str) -> Option<Arc<dyn MapProvider>> {
    match name.to_ascii_lowercase().as_str() {
        "osm" | "openstreetmap" => Some(Arc::new(OpenStreetMap)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lng: f64) -> BoundaryPoint {
        BoundaryPoint::new(lat, lng, format!("pt-{lat}-{lng}"))
    }

    // Degrees subtended by 1000 m along a meridian of the mean-radius sphere.
    const ONE_KM_DEG: f64 = 0.008993216059187304;

    #[test]
    fn area_of_degenerate_polygons_is_zero() {
        assert_eq!(OpenStreetMap.area(&[]), 0.0);
        assert_eq!(OpenStreetMap.area(&[pt(0.0, 0.0)]), 0.0);
        assert_eq!(OpenStreetMap.area(&[pt(0.0, 0.0), pt(0.0, ONE_KM_DEG)]), 0.0);
    }

    #[test]
    fn one_km_square_near_the_equator() {
        let square = [
            pt(0.0, 0.0),
            pt(0.0, ONE_KM_DEG),
            pt(ONE_KM_DEG, ONE_KM_DEG),
            pt(ONE_KM_DEG, 0.0),
        ];
        let area = OpenStreetMap.area(&square);
        assert!(
            (area - 1_000_000.0).abs() < 1_000.0,
            "expected ~1e6 m^2, got {area}"
        );

        let perimeter = OpenStreetMap.perimeter(&square);
        assert!(
            (perimeter - 4_000.0).abs() < 1.0,
            "expected ~4000 m, got {perimeter}"
        );
    }

    #[test]
    fn winding_direction_does_not_change_area() {
        let mut square = vec![
            pt(12.97, 77.59),
            pt(12.97, 77.59 + ONE_KM_DEG),
            pt(12.97 + ONE_KM_DEG, 77.59 + ONE_KM_DEG),
            pt(12.97 + ONE_KM_DEG, 77.59),
        ];
        let ccw = OpenStreetMap.area(&square);
        square.reverse();
        let cw = OpenStreetMap.area(&square);
        assert!((ccw - cw).abs() < 1e-6);
        // At ~13 degrees latitude the east-west edges contract by cos(lat).
        assert!((ccw - 974_470.0).abs() < 1_000.0, "got {ccw}");
    }

    #[test]
    fn distance_along_a_meridian() {
        let d = OpenStreetMap.distance(LatLng::new(0.0, 0.0), LatLng::new(1.0, 0.0));
        assert!((d - 111_194.926).abs() < 0.01, "got {d}");
    }

    #[test]
    fn perimeter_of_two_points_is_there_and_back() {
        let d = OpenStreetMap.perimeter(&[pt(0.0, 0.0), pt(0.0, ONE_KM_DEG)]);
        assert!((d - 2_000.0).abs() < 0.01, "got {d}");
    }

    #[test]
    fn triangle_perimeter_matches_pairwise_distances() {
        let a = pt(12.9716, 77.5946);
        let b = pt(12.9816, 77.5946);
        let c = pt(12.9716, 77.6046);

        let ab = OpenStreetMap.distance((&a).into(), (&b).into());
        let bc = OpenStreetMap.distance((&b).into(), (&c).into());
        let ca = OpenStreetMap.distance((&c).into(), (&a).into());

        assert!((ab - 1_111.949).abs() < 0.01);
        assert!((bc - 1_552.584).abs() < 0.01);
        assert!((ca - 1_083.574).abs() < 0.01);

        let perimeter = OpenStreetMap.perimeter(&[a, b, c]);
        assert!((perimeter - (ab + bc + ca)).abs() < 1e-9);
        assert!((perimeter - 3_748.107).abs() < 0.01);
    }

    #[test]
    fn tile_url_is_slippy_format() {
        assert_eq!(
            OpenStreetMap.tile_url(5, 7, 9),
            "https://tile.openstreetmap.org/9/5/7.png"
        );
    }

    #[test]
    fn provider_lookup_by_name() {
        assert!(provider_by_name("osm").is_some());
        assert!(provider_by_name("OpenStreetMap").is_some());
        assert!(provider_by_name("bhuvan").is_none());
    }
}
