//! Distance units of the BQS grammar and their conversion to meters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::GeometryError;

pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
pub const METERS_PER_STATUTE_MILE: f64 = 1609.344;

/// Distance units accepted after `WITHIN`/`BEYOND` and inside circle/ellipse shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Feet,
    Meters,
    Kilometers,
    NauticalMiles,
    StatuteMiles,
}

impl DistanceUnit {
    /// Looks up a grammar token (`FEET`, `METERS`, `KILOMETER`, `NAUTICAL_MI`, `STATUTE_MI`)
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "FEET" | "FOOT" => Some(DistanceUnit::Feet),
            "METERS" | "METER" => Some(DistanceUnit::Meters),
            "KILOMETER" | "KILOMETERS" => Some(DistanceUnit::Kilometers),
            "NAUTICAL_MI" | "NAUTICAL_MILES" => Some(DistanceUnit::NauticalMiles),
            "STATUTE_MI" | "STATUTE_MILES" => Some(DistanceUnit::StatuteMiles),
            _ => None,
        }
    }

    /// The canonical grammar token
    pub fn token(&self) -> &'static str {
        match self {
            DistanceUnit::Feet => "FEET",
            DistanceUnit::Meters => "METERS",
            DistanceUnit::Kilometers => "KILOMETER",
            DistanceUnit::NauticalMiles => "NAUTICAL_MI",
            DistanceUnit::StatuteMiles => "STATUTE_MI",
        }
    }

    pub fn meters_per_unit(&self) -> f64 {
        match self {
            DistanceUnit::Feet => METERS_PER_FOOT,
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => METERS_PER_KILOMETER,
            DistanceUnit::NauticalMiles => METERS_PER_NAUTICAL_MILE,
            DistanceUnit::StatuteMiles => METERS_PER_STATUTE_MILE,
        }
    }

    /// Converts `value` expressed in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }
}

impl FromStr for DistanceUnit {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceUnit::from_token(s).ok_or_else(|| GeometryError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
