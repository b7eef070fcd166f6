//! Haversine-backed geodesic primitives (default provider).
//!
//! Delegates to the `geo` crate's haversine metric on the mean-radius
//! sphere. Accurate to within ~0.3% of ellipsoidal results, which is
//! plenty for closest-point scans and route lengths.

use geo::Point;
use geo::algorithm::line_measures::metric_spaces::Haversine;
use geo::algorithm::line_measures::{Bearing, Destination, Distance};

use crate::geometry::Position;
use crate::traits::Geodesy;

/// Great-circle primitives on the haversine sphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineGeodesy;

impl Geodesy for HaversineGeodesy {
    fn distance_m(&self, from: Position, to: Position) -> f64 {
        Haversine.distance(point(from), point(to))
    }

    fn bearing(&self, from: Position, to: Position) -> f64 {
        Haversine.bearing(point(from), point(to))
    }

    fn destination(&self, origin: Position, bearing: f64, distance_m: f64) -> Position {
        let reached = Haversine.destination(point(origin), bearing, distance_m);
        [reached.x(), reached.y()]
    }
}

fn point(position: Position) -> Point<f64> {
    Point::new(position[0], position[1])
}
