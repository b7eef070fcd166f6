//! Distance units for measurement results.

use serde::{Deserialize, Serialize};

/// Sphere radius in meters, matching the mean radius used by the haversine
/// metric in `geo`.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1_609.344;

/// Unit a measurement is reported in.
///
/// `Degrees` and `Radians` are arc units on the mean-radius sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Degrees,
    Radians,
    #[default]
    Miles,
    Kilometers,
}

impl Units {
    /// Converts a meter distance into this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            Units::Degrees => (meters / EARTH_RADIUS_M).to_degrees(),
            Units::Radians => meters / EARTH_RADIUS_M,
            Units::Miles => meters / METERS_PER_MILE,
            Units::Kilometers => meters / 1000.0,
        }
    }

    /// Converts a distance in this unit into meters.
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Units::Degrees => value.to_radians() * EARTH_RADIUS_M,
            Units::Radians => value * EARTH_RADIUS_M,
            Units::Miles => value * METERS_PER_MILE,
            Units::Kilometers => value * 1000.0,
        }
    }
}
