// src/math/geometry/sphere/units.rs

use crate::math::utils::constants::EARTH_RADIUS_M;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Längeneinheiten für Radien auf der Erdkugel.
/// Serialisiert wie die üblichen Web-Karten-Bezeichner (`"miles"`, `"kilometers"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    Meters,
    Centimeters,
    Millimeters,
    Feet,
    Yards,
    Inches,
    NauticalMiles,
    Radians,
    Degrees,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 11] = [
        DistanceUnit::Miles,
        DistanceUnit::Kilometers,
        DistanceUnit::Meters,
        DistanceUnit::Centimeters,
        DistanceUnit::Millimeters,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::Inches,
        DistanceUnit::NauticalMiles,
        DistanceUnit::Radians,
        DistanceUnit::Degrees,
    ];

    /// Länge eines Bogenradians auf der Erdoberfläche in dieser Einheit
    pub fn per_radian(&self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_M / 1609.344,
            DistanceUnit::Kilometers => EARTH_RADIUS_M / 1000.0,
            DistanceUnit::Meters => EARTH_RADIUS_M,
            DistanceUnit::Centimeters => EARTH_RADIUS_M * 100.0,
            DistanceUnit::Millimeters => EARTH_RADIUS_M * 1000.0,
            DistanceUnit::Feet => EARTH_RADIUS_M * 3.28084,
            DistanceUnit::Yards => EARTH_RADIUS_M * 1.0936,
            DistanceUnit::Inches => EARTH_RADIUS_M * 39.37,
            DistanceUnit::NauticalMiles => EARTH_RADIUS_M / 1852.0,
            DistanceUnit::Radians => 1.0,
            DistanceUnit::Degrees => 180.0 / std::f64::consts::PI,
        }
    }

    /// Distanz in dieser Einheit → Zentriwinkel in Radiant
    pub fn to_radians(&self, distance: f64) -> f64 {
        distance / self.per_radian()
    }

    /// Zentriwinkel in Radiant → Distanz in dieser Einheit
    pub fn from_radians(&self, radians: f64) -> f64 {
        radians * self.per_radian()
    }

    pub fn name(&self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Meters => "meters",
            DistanceUnit::Centimeters => "centimeters",
            DistanceUnit::Millimeters => "millimeters",
            DistanceUnit::Feet => "feet",
            DistanceUnit::Yards => "yards",
            DistanceUnit::Inches => "inches",
            DistanceUnit::NauticalMiles => "nauticalmiles",
            DistanceUnit::Radians => "radians",
            DistanceUnit::Degrees => "degrees",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
