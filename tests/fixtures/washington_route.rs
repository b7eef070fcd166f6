//! A six-point route through downtown Washington DC.
//!
//! Coordinates sourced from OpenStreetMap, in (longitude, latitude) order.

use line_locate::geometry::Position;

/// Route vertices running north from the National Mall.
pub const DC_ROUTE: &[Position] = &[
    [-77.0316696166992, 38.878605901789236],
    [-77.02960968017578, 38.88194668656296],
    [-77.02033996582031, 38.88408470638821],
    [-77.02566146850586, 38.885821800123196],
    [-77.02188491821289, 38.88956308852534],
    [-77.01982498168944, 38.89236892551996],
];

/// A query point lying exactly on `DC_ROUTE[2]`.
pub const ON_VERTEX_QUERY: Position = [-77.02033996582031, 38.88408470638821];

/// The same query rounded to four decimals, a few meters off the vertex.
pub const NEAR_VERTEX_QUERY: Position = [-77.0203, 38.8841];
