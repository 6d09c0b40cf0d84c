//! Shape literal assembly
//!
//! A [`WktBuilder`] is opened when the compiler enters a shape node, fed the
//! shape's coordinates and measures in grammar order, and closed when the
//! shape node is exited. Grammar coordinates arrive as (lat, lon); the WKT
//! produced is always `lon lat`.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{GeometryError, GeometryResult};
use super::wkt::{line_wkt, point_wkt, polygon_wkt, BoundingBox, Coordinate};

/// Default vertex count for ellipse approximation
pub const DEFAULT_ELLIPSE_VERTICES: usize = 30;

/// Upper bound on ellipse vertices
pub const MAX_ELLIPSE_VERTICES: usize = 10_000;

/// Shape literals of the BQS grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Point,
    Polygon,
    Rectangle,
    Line,
    Circle,
    Ellipse,
}

impl ShapeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ShapeKind::Point => "POINT",
            ShapeKind::Polygon => "POLYGON",
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::Line => "LINE",
            ShapeKind::Circle => "CIRCLE",
            ShapeKind::Ellipse => "ELLIPSE",
        }
    }
}

/// A finished shape: WKT text plus, for buffered shapes, a radius in meters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLiteral {
    pub wkt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_meters: Option<f64>,
}

impl GeoLiteral {
    pub fn new(wkt: impl Into<String>) -> Self {
        Self {
            wkt: wkt.into(),
            buffer_meters: None,
        }
    }

    pub fn buffered(wkt: impl Into<String>, meters: f64) -> Self {
        Self {
            wkt: wkt.into(),
            buffer_meters: Some(meters),
        }
    }
}

impl fmt::Display for GeoLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.buffer_meters {
            Some(meters) => write!(f, "{} buffered {}m", self.wkt, meters),
            None => f.write_str(&self.wkt),
        }
    }
}

/// Accumulates one shape literal
#[derive(Debug, Clone)]
pub struct WktBuilder {
    kind: ShapeKind,
    coordinates: Vec<Coordinate>,
    distances: Vec<f64>,
    angle: Option<f64>,
    ellipse_vertices: usize,
}

impl WktBuilder {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            coordinates: Vec::new(),
            distances: Vec::new(),
            angle: None,
            ellipse_vertices: DEFAULT_ELLIPSE_VERTICES,
        }
    }

    pub fn with_ellipse_vertices(mut self, vertices: usize) -> Self {
        self.ellipse_vertices = vertices;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn push_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }

    /// Adds a radius or axis length, already converted to meters
    pub fn push_distance(&mut self, meters: f64) {
        self.distances.push(meters);
    }

    /// Sets the ellipse orientation in degrees clockwise from north
    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = Some(degrees);
    }

    pub fn finish(self) -> GeometryResult<GeoLiteral> {
        let shape = self.kind.keyword();
        let coords = &self.coordinates;
        match self.kind {
            ShapeKind::Point => {
                self.expect_counts(1, 0, "1 coordinate")?;
                Ok(GeoLiteral::new(point_wkt(coords[0])))
            }
            ShapeKind::Line => {
                if coords.len() < 2 {
                    return Err(GeometryError::WrongArity {
                        shape,
                        expected: "at least 2 coordinates",
                        actual: coords.len(),
                    });
                }
                Ok(GeoLiteral::new(line_wkt(coords)))
            }
            ShapeKind::Polygon => {
                if coords.len() < 3 {
                    return Err(GeometryError::WrongArity {
                        shape,
                        expected: "at least 3 coordinates",
                        actual: coords.len(),
                    });
                }
                Ok(GeoLiteral::new(polygon_wkt(coords)))
            }
            ShapeKind::Rectangle => {
                self.expect_counts(2, 0, "2 coordinates")?;
                let ring = BoundingBox::new(coords[0], coords[1]).ring();
                Ok(GeoLiteral::new(polygon_wkt(&ring)))
            }
            ShapeKind::Circle => {
                self.expect_counts(1, 1, "1 coordinate and a radius")?;
                Ok(GeoLiteral::buffered(point_wkt(coords[0]), self.distances[0]))
            }
            ShapeKind::Ellipse => {
                self.expect_counts(1, 2, "1 coordinate and 2 axis lengths")?;
                let ring = ellipse_ring(
                    coords[0],
                    self.distances[0],
                    self.distances[1],
                    self.angle.unwrap_or(0.0),
                    self.ellipse_vertices,
                )?;
                Ok(GeoLiteral::new(polygon_wkt(&ring)))
            }
        }
    }

    fn expect_counts(
        &self,
        coordinates: usize,
        distances: usize,
        expected: &'static str,
    ) -> GeometryResult<()> {
        if self.coordinates.len() != coordinates {
            return Err(GeometryError::WrongArity {
                shape: self.kind.keyword(),
                expected,
                actual: self.coordinates.len(),
            });
        }
        if self.distances.len() != distances {
            return Err(GeometryError::WrongArity {
                shape: self.kind.keyword(),
                expected,
                actual: self.distances.len(),
            });
        }
        Ok(())
    }
}

/// Meters spanned by one degree of latitude at `lat` degrees
pub fn meters_per_degree_lat(lat: f64) -> f64 {
    let phi = lat.to_radians();
    111_132.92 - 559.82 * (2.0 * phi).cos() + 1.175 * (4.0 * phi).cos()
        - 0.0023 * (6.0 * phi).cos()
}

/// Meters spanned by one degree of longitude at `lat` degrees
pub fn meters_per_degree_lon(lat: f64) -> f64 {
    let phi = lat.to_radians();
    111_412.84 * phi.cos() - 93.5 * (3.0 * phi).cos() + 0.118 * (5.0 * phi).cos()
}

/// Closed polygon ring approximating an ellipse.
///
/// `major` and `minor` are full axis lengths in meters; `angle` is the
/// bearing of the major axis in degrees clockwise from north.
pub fn ellipse_ring(
    center: Coordinate,
    major: f64,
    minor: f64,
    angle: f64,
    vertices: usize,
) -> GeometryResult<Vec<Coordinate>> {
    if vertices < 3 {
        return Err(GeometryError::WrongArity {
            shape: "ELLIPSE",
            expected: "at least 3 vertices",
            actual: vertices,
        });
    }
    let capacity = match vertices.checked_add(1) {
        Some(n) if vertices <= MAX_ELLIPSE_VERTICES => n,
        _ => {
            return Err(GeometryError::WrongArity {
                shape: "ELLIPSE",
                expected: "at most 10000 vertices",
                actual: vertices,
            })
        }
    };
    let lat_scale = meters_per_degree_lat(center.lat);
    let lon_scale = meters_per_degree_lon(center.lat);
    if lon_scale.abs() < 1e-6 {
        return Err(GeometryError::InvalidCoordinate(format!(
            "ellipse centre at latitude {}",
            center.lat
        )));
    }

    let semi_major = major / 2.0;
    let semi_minor = minor / 2.0;
    let (sin_t, cos_t) = angle.to_radians().sin_cos();

    let mut ring = Vec::with_capacity(capacity);
    for i in 0..vertices {
        let step = 2.0 * PI * i as f64 / vertices as f64;
        let along = semi_major * step.cos();
        let across = semi_minor * step.sin();
        let north = along * cos_t - across * sin_t;
        let east = along * sin_t + across * cos_t;
        ring.push(Coordinate::new(
            center.lat + north / lat_scale,
            center.lon + east / lon_scale,
        ));
    }
    ring.push(ring[0]);
    Ok(ring)
}
