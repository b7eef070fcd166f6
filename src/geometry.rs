//! GeoJSON-shaped geometry records.
//!
//! Records are plain serde types so they round-trip as GeoJSON. The crate
//! accepts exactly two line inputs: a bare `LineString` geometry or a
//! `Feature` wrapping one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (longitude, latitude) coordinate pair.
///
/// Serializes as a GeoJSON coordinate array. Values are not range-checked.
pub type Position = [f64; 2];

/// Geometry records the crate constructs and consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
}

impl Geometry {
    pub fn point(coordinates: Position) -> Self {
        Geometry::Point { coordinates }
    }

    pub fn line_string(coordinates: Vec<Position>) -> Self {
        Geometry::LineString { coordinates }
    }

    /// The GeoJSON type tag of this record.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
        }
    }
}

/// A feature wrapping a single geometry.
///
/// Foreign members such as `properties` are ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }
}

/// Line input accepted by the measurement entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineInput {
    Feature(Feature),
    Geometry(Geometry),
}

impl LineInput {
    /// Unwraps the LineString coordinate sequence behind either shape.
    pub fn line_coordinates(&self) -> Result<&[Position], GeometryError> {
        let geometry = match self {
            LineInput::Feature(feature) => &feature.geometry,
            LineInput::Geometry(geometry) => geometry,
        };
        match geometry {
            Geometry::LineString { coordinates } => Ok(coordinates),
            other => Err(GeometryError::InvalidGeometryKind { found: other.kind() }),
        }
    }
}

impl From<Feature> for LineInput {
    fn from(feature: Feature) -> Self {
        LineInput::Feature(feature)
    }
}

impl From<Geometry> for LineInput {
    fn from(geometry: Geometry) -> Self {
        LineInput::Geometry(geometry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The line input did not unwrap to a LineString.
    InvalidGeometryKind { found: &'static str },
    /// The line had fewer than the two positions a segment needs.
    TooFewPositions { found: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidGeometryKind { found } => {
                write!(f, "input must be a LineString Feature or Geometry, got {found}")
            }
            GeometryError::TooFewPositions { found } => {
                write!(f, "a LineString needs at least 2 positions, got {found}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_coordinates_from_geometry() {
        let line = LineInput::from(Geometry::line_string(vec![[0.0, 0.0], [1.0, 1.0]]));
        assert_eq!(line.line_coordinates().unwrap(), &[[0.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn test_line_coordinates_from_feature() {
        let feature = Feature::new(Geometry::line_string(vec![[2.0, 3.0], [4.0, 5.0]]));
        let line = LineInput::from(feature);
        assert_eq!(line.line_coordinates().unwrap(), &[[2.0, 3.0], [4.0, 5.0]]);
    }

    #[test]
    fn test_point_input_is_rejected() {
        let line = LineInput::from(Geometry::point([1.0, 2.0]));
        let err = line.line_coordinates().unwrap_err();
        assert_eq!(err, GeometryError::InvalidGeometryKind { found: "Point" });
        assert!(
            err.to_string()
                .starts_with("input must be a LineString Feature or Geometry")
        );
    }

    #[test]
    fn test_feature_wrapping_point_is_rejected() {
        let line = LineInput::from(Feature::new(Geometry::point([1.0, 2.0])));
        assert!(line.line_coordinates().is_err());
    }

    #[test]
    fn test_deserializes_bare_linestring() {
        let json = r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,2.0]]}"#;
        let line: LineInput = serde_json::from_str(json).unwrap();
        assert_eq!(line.line_coordinates().unwrap(), &[[0.0, 0.0], [1.0, 2.0]]);
    }

    #[test]
    fn test_deserializes_feature_ignoring_properties() {
        let json = r#"{
            "type": "Feature",
            "properties": {"name": "downtown route"},
            "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 2.0]]}
        }"#;
        let line: LineInput = serde_json::from_str(json).unwrap();
        assert_eq!(line.line_coordinates().unwrap(), &[[0.0, 0.0], [1.0, 2.0]]);
    }

    #[test]
    fn test_unknown_type_tag_fails_to_parse() {
        let json = r#"{"type":"Polygon","coordinates":[[[0.0,0.0]]]}"#;
        assert!(serde_json::from_str::<LineInput>(json).is_err());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let geometry = Geometry::line_string(vec![[0.0, 0.0], [1.0, 1.0]]);
        let json = serde_json::to_string(&geometry).unwrap();
        assert!(json.contains(r#""type":"LineString""#));
    }
}
