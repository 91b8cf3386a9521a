//! Great-circle distance over park coordinates.
//!
//! Distances are straight-line haversine miles, not road miles. That is
//! deliberately rough: the estimates feed cost and travel-time heuristics,
//! not navigation.

use crate::domain::{Coordinate, ParkStop};

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine great-circle distance between two coordinates, in miles.
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Distance between two optional coordinates, in miles.
///
/// A missing coordinate contributes zero distance rather than an error, so
/// partially filled-in trips always have a defined route length.
pub fn distance(a: Option<Coordinate>, b: Option<Coordinate>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => haversine_miles(a, b),
        _ => 0.0,
    }
}

/// Total route distance over an ordered park sequence, in miles.
///
/// Sums consecutive-pair distances; pairs where either stop lacks
/// coordinates are skipped silently. Lists shorter than two stops have
/// zero distance.
pub fn route_distance(parks: &[ParkStop]) -> f64 {
    parks
        .windows(2)
        .map(|pair| distance(pair[0].coordinates, pair[1].coordinates))
        .sum()
}
