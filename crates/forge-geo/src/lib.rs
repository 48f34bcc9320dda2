//! Geometry engine for land-boundary polygons.
//!
//! All measurements are spherical approximations over the Earth's mean
//! radius, valid for parcels that are small relative to the planet and do
//! not cross the antimeridian or poles. The engine is pure and does not
//! range-check coordinates; callers validate with [`validation`] first.

pub mod engine;
pub mod provider;
pub mod validation;

pub use engine::{GeometryEngine, PolygonMetrics, Quantity, SQUARE_METERS_PER_ACRE};
pub use provider::{provider_by_name, LatLng, MapProvider, OpenStreetMap, EARTH_RADIUS_METERS};
pub use validation::validate_boundary;
