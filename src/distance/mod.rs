//! Great-circle distance calculations.
//!
//! All distances are haversine distances on a sphere of radius 6371 km;
//! no road network is consulted.

mod haversine;

pub use haversine::{centroid, haversine_km, path_length_km, EARTH_RADIUS_KM};
