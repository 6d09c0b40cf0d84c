//! Well-Known Text geometries
//!
//! Coordinates are held as (lat, lon) but WKT positions are written and read
//! as `lon lat`. Every conversion between the two goes through
//! [`Coordinate::write_wkt`] and [`parse_position`].

use std::fmt::{self, Write};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{GeometryError, GeometryResult};

/// A geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parses a coordinate from its latitude and longitude texts
    pub fn from_text(lat: &str, lon: &str) -> GeometryResult<Self> {
        Ok(Self::new(parse_degrees(lat)?, parse_degrees(lon)?))
    }

    /// Appends `lon lat` to `out`
    pub fn write_wkt(&self, out: &mut String) {
        let _ = write!(out, "{} {}", self.lon, self.lat);
    }
}

fn parse_degrees(text: &str) -> GeometryResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GeometryError::InvalidCoordinate(trimmed.to_string())),
    }
}

/// Axis-aligned box given by its upper-left and lower-right corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub upper_left: Coordinate,
    pub lower_right: Coordinate,
}

impl BoundingBox {
    pub fn new(upper_left: Coordinate, lower_right: Coordinate) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// True when both corners are the same position
    pub fn is_point(&self) -> bool {
        self.upper_left == self.lower_right
    }

    /// Closed ring UL, UR, LR, LL, UL
    pub fn ring(&self) -> Vec<Coordinate> {
        let ul = self.upper_left;
        let lr = self.lower_right;
        vec![
            ul,
            Coordinate::new(ul.lat, lr.lon),
            lr,
            Coordinate::new(lr.lat, ul.lon),
            ul,
        ]
    }

    /// A point when the corners coincide, otherwise the closed rectangle
    pub fn to_geometry(&self) -> Geometry {
        if self.is_point() {
            Geometry::Point(self.upper_left)
        } else {
            Geometry::Polygon(self.ring())
        }
    }
}

/// The WKT geometries this adapter reads and writes
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    /// Outer ring only; holes are not carried
    Polygon(Vec<Coordinate>),
}

type PatternCell = OnceLock<Result<Regex, regex::Error>>;

fn compiled(cell: &'static PatternCell, pattern: &str) -> GeometryResult<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| GeometryError::MalformedWkt(format!("pattern {}: {}", pattern, e)))
}

fn wkt_pattern() -> GeometryResult<&'static Regex> {
    static PATTERN: PatternCell = OnceLock::new();
    compiled(&PATTERN, r"(?is)^\s*([a-z]+)\s*\((.*)\)\s*$")
}

fn ring_pattern() -> GeometryResult<&'static Regex> {
    static PATTERN: PatternCell = OnceLock::new();
    compiled(&PATTERN, r"^\s*\(([^()]*)\)")
}

impl Geometry {
    /// Parses `POINT`, `LINESTRING` or `POLYGON` text
    pub fn parse(text: &str) -> GeometryResult<Self> {
        let captures = wkt_pattern()?
            .captures(text)
            .ok_or_else(|| GeometryError::MalformedWkt(text.trim().to_string()))?;
        let kind = captures[1].to_ascii_uppercase();
        let body = &captures[2];

        match kind.as_str() {
            "POINT" => {
                let coords = parse_position_list(body)?;
                match coords.as_slice() {
                    [single] => Ok(Geometry::Point(*single)),
                    _ => Err(GeometryError::WrongArity {
                        shape: "POINT",
                        expected: "1 position",
                        actual: coords.len(),
                    }),
                }
            }
            "LINESTRING" => {
                let coords = parse_position_list(body)?;
                if coords.len() < 2 {
                    return Err(GeometryError::WrongArity {
                        shape: "LINESTRING",
                        expected: "at least 2 positions",
                        actual: coords.len(),
                    });
                }
                Ok(Geometry::LineString(coords))
            }
            "POLYGON" => {
                let ring = ring_pattern()?
                    .captures(body)
                    .ok_or_else(|| GeometryError::MalformedWkt(text.trim().to_string()))?;
                let coords = parse_position_list(&ring[1])?;
                if coords.len() < 4 {
                    return Err(GeometryError::WrongArity {
                        shape: "POLYGON",
                        expected: "at least 4 positions",
                        actual: coords.len(),
                    });
                }
                Ok(Geometry::Polygon(coords))
            }
            other => Err(GeometryError::UnsupportedType(other.to_string())),
        }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Geometry::Point(c) => std::slice::from_ref(c),
            Geometry::LineString(coords) | Geometry::Polygon(coords) => coords,
        }
    }

    /// Smallest bounding box containing every position
    pub fn envelope(&self) -> BoundingBox {
        let coords = self.coordinates();
        let first = coords[0];
        let (mut min_lat, mut max_lat, mut min_lon, mut max_lon) =
            (first.lat, first.lat, first.lon, first.lon);
        for c in &coords[1..] {
            min_lat = min_lat.min(c.lat);
            max_lat = max_lat.max(c.lat);
            min_lon = min_lon.min(c.lon);
            max_lon = max_lon.max(c.lon);
        }
        BoundingBox::new(
            Coordinate::new(max_lat, min_lon),
            Coordinate::new(min_lat, max_lon),
        )
    }

    pub fn to_wkt(&self) -> String {
        match self {
            Geometry::Point(c) => point_wkt(*c),
            Geometry::LineString(coords) => line_wkt(coords),
            Geometry::Polygon(coords) => polygon_wkt(coords),
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

fn parse_position_list(text: &str) -> GeometryResult<Vec<Coordinate>> {
    text.split(',').map(parse_position).collect()
}

/// Reads one `lon lat [z]` WKT position
pub fn parse_position(text: &str) -> GeometryResult<Coordinate> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [lon, lat] | [lon, lat, _] => Coordinate::from_text(lat, lon),
        _ => Err(GeometryError::MalformedWkt(format!(
            "position '{}'",
            text.trim()
        ))),
    }
}

fn write_positions(out: &mut String, coords: &[Coordinate]) {
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        c.write_wkt(out);
    }
}

pub fn point_wkt(c: Coordinate) -> String {
    let mut out = String::from("POINT(");
    c.write_wkt(&mut out);
    out.push(')');
    out
}

pub fn line_wkt(coords: &[Coordinate]) -> String {
    let mut out = String::from("LINESTRING(");
    write_positions(&mut out, coords);
    out.push(')');
    out
}

pub fn polygon_wkt(ring: &[Coordinate]) -> String {
    let mut out = String::from("POLYGON((");
    write_positions(&mut out, ring);
    out.push_str("))");
    out
}
