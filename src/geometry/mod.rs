//! Geometry/WKT builder
//!
//! Assembles BQS shape literals into WKT, converts distance units to meters,
//! and reads the WKT carried by catalog records.
//!
//! # Conventions
//!
//! - Grammar coordinates are (lat, lon); WKT positions are `lon lat`
//! - Every distance leaving this module is in meters
//! - Degrees/minutes/seconds coordinates are rejected, never converted

mod builder;
mod errors;
mod units;
mod wkt;

pub use builder::{
    ellipse_ring, meters_per_degree_lat, meters_per_degree_lon, GeoLiteral, ShapeKind,
    WktBuilder, DEFAULT_ELLIPSE_VERTICES, MAX_ELLIPSE_VERTICES,
};
pub use errors::{GeometryError, GeometryResult};
pub use units::{
    DistanceUnit, METERS_PER_FOOT, METERS_PER_KILOMETER, METERS_PER_NAUTICAL_MILE,
    METERS_PER_STATUTE_MILE,
};
pub use wkt::{line_wkt, parse_position, point_wkt, polygon_wkt, BoundingBox, Coordinate, Geometry};
