//! Closest-point projection along a LineString.
//!
//! For every segment of the line the scan weighs three candidates: the
//! segment's endpoints and, when a perpendicular ray cast from the query
//! point crosses the segment, the foot of that ray. The globally closest
//! candidate wins, together with the index of the segment it came from.

use tracing::debug;

use crate::geometry::{Geometry, GeometryError, LineInput, Position};
use crate::haversine::HaversineGeodesy;
use crate::intersect::segment_intersection;
use crate::measure::{distance_with, total_length_with};
use crate::traits::Geodesy;
use crate::units::Units;

/// Default reach of the perpendicular probe, in miles.
pub const DEFAULT_PROBE_REACH_MILES: f64 = 1000.0;

/// Tuning knobs for the projection scan.
#[derive(Debug, Clone)]
pub struct LocateOptions {
    /// Reach of the perpendicular probe cast from the query point, in miles
    /// regardless of the measurement unit.
    ///
    /// Must exceed the largest perpendicular offset between the query point
    /// and any segment; a probe that falls short finds no foot candidate for
    /// that segment and an endpoint wins instead.
    pub probe_reach_miles: f64,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            probe_reach_miles: DEFAULT_PROBE_REACH_MILES,
        }
    }
}

/// The closest point on a line to a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    /// Closest position on the line.
    pub position: Position,
    /// Distance from the query point, in the requested unit.
    pub distance: f64,
    /// Index of the segment the position lies on.
    pub segment: usize,
}

/// Finds the closest point on `line` to `query`.
pub fn locate(query: Position, line: &LineInput, units: Units) -> Result<Located, GeometryError> {
    locate_with(
        &HaversineGeodesy,
        query,
        line,
        units,
        &LocateOptions::default(),
    )
}

/// Finds the closest point on `line` to `query` with an explicit geodesy
/// provider and scan options.
pub fn locate_with<G: Geodesy>(
    geodesy: &G,
    query: Position,
    line: &LineInput,
    units: Units,
    options: &LocateOptions,
) -> Result<Located, GeometryError> {
    let coords = line_positions(line)?;
    Ok(project(geodesy, query, coords, units, options))
}

/// Prefix of the line ending at the located point.
///
/// Copies `coords[0..=segment]` and appends the located position, producing
/// a LineString of `segment + 2` positions. The input is not modified.
pub fn clip_to(coords: &[Position], located: &Located) -> Geometry {
    let mut clipped = Vec::with_capacity(located.segment + 2);
    clipped.extend_from_slice(&coords[..=located.segment]);
    clipped.push(located.position);
    Geometry::line_string(clipped)
}

/// Measures `line` against a query point and returns its total length in
/// the requested unit.
///
/// The length is a property of the line alone; the query point steers the
/// closest-point scan, whose outcome is emitted as a debug event and
/// available programmatically through [`locate`] and [`clip_to`].
pub fn point_along_line(
    point: Position,
    line: &LineInput,
    units: Units,
) -> Result<f64, GeometryError> {
    let coords = line_positions(line)?;
    let located = project(
        &HaversineGeodesy,
        point,
        coords,
        units,
        &LocateOptions::default(),
    );
    let clipped = clip_to(coords, &located);
    debug!(segment = located.segment, clipped = ?clipped, "closest point located");

    Ok(total_length_with(&HaversineGeodesy, coords, units))
}

fn line_positions(line: &LineInput) -> Result<&[Position], GeometryError> {
    let coords = line.line_coordinates()?;
    if coords.len() < 2 {
        return Err(GeometryError::TooFewPositions {
            found: coords.len(),
        });
    }
    Ok(coords)
}

/// Scans every segment of `coords` for the closest candidate to `query`.
///
/// `coords` must hold at least two positions (one segment); callers go
/// through [`line_positions`] which enforces that.
fn project<G: Geodesy>(
    geodesy: &G,
    query: Position,
    coords: &[Position],
    units: Units,
    options: &LocateOptions,
) -> Located {
    let reach_m = Units::Miles.to_meters(options.probe_reach_miles);

    // Sentinel loses to the first real candidate.
    let mut best = Located {
        position: [f64::INFINITY, f64::INFINITY],
        distance: f64::INFINITY,
        segment: 0,
    };

    for (segment, pair) in coords.windows(2).enumerate() {
        let (start, stop) = (pair[0], pair[1]);
        let direction = geodesy.bearing(start, stop);

        // Cast toward one side of the segment, then the other when the
        // first probe points away from it.
        let foot = perpendicular_foot(geodesy, query, direction + 90.0, reach_m, start, stop)
            .or_else(|| perpendicular_foot(geodesy, query, direction - 90.0, reach_m, start, stop));

        for position in [Some(start), Some(stop), foot].into_iter().flatten() {
            let distance = distance_with(geodesy, query, position, units);
            if distance < best.distance {
                best = Located {
                    position,
                    distance,
                    segment,
                };
            }
        }
    }

    best
}

fn perpendicular_foot<G: Geodesy>(
    geodesy: &G,
    query: Position,
    bearing: f64,
    reach_m: f64,
    start: Position,
    stop: Position,
) -> Option<Position> {
    let probe = geodesy.destination(query, bearing, reach_m);
    segment_intersection(query, probe, start, stop)
}
