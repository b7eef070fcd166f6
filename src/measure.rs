//! Unit-aware geodesic measurements.

use crate::geometry::Position;
use crate::haversine::HaversineGeodesy;
use crate::traits::Geodesy;
use crate::units::Units;

/// Great-circle distance between two positions, in the requested unit.
pub fn distance(from: Position, to: Position, units: Units) -> f64 {
    distance_with(&HaversineGeodesy, from, to, units)
}

pub fn distance_with<G: Geodesy>(geodesy: &G, from: Position, to: Position, units: Units) -> f64 {
    units.from_meters(geodesy.distance_m(from, to))
}

/// Total length of a line as the sum of consecutive-vertex distances.
///
/// Lines with fewer than two positions measure zero.
pub fn total_length(coords: &[Position], units: Units) -> f64 {
    total_length_with(&HaversineGeodesy, coords, units)
}

pub fn total_length_with<G: Geodesy>(geodesy: &G, coords: &[Position], units: Units) -> f64 {
    coords
        .windows(2)
        .map(|pair| distance_with(geodesy, pair[0], pair[1], units))
        .sum()
}
