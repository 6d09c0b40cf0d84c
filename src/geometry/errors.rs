//! Geometry error types
//!
//! Error codes:
//! - BQS_GEOMETRY_MALFORMED_WKT
//! - BQS_GEOMETRY_UNSUPPORTED_TYPE
//! - BQS_GEOMETRY_INVALID_COORDINATE
//! - BQS_GEOMETRY_WRONG_ARITY
//! - BQS_GEOMETRY_UNKNOWN_UNIT
//! - BQS_GEOMETRY_DMS_UNSUPPORTED

use thiserror::Error;

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Geometry errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Text is not well-formed WKT
    #[error("Malformed WKT: {0}")]
    MalformedWkt(String),

    /// WKT geometry type this adapter does not read
    #[error("Unsupported geometry type: {0}")]
    UnsupportedType(String),

    /// Coordinate component is not a finite number
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Shape received the wrong number of coordinates or measures
    #[error("{shape} requires {expected}, got {actual}")]
    WrongArity {
        shape: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// Distance unit token outside the grammar's unit set
    #[error("Unknown distance unit: {0}")]
    UnknownUnit(String),

    /// Degrees/minutes/seconds coordinate; no conversion exists
    #[error("DMS coordinates are not supported: {0}")]
    DmsUnsupported(String),
}

impl GeometryError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            GeometryError::MalformedWkt(_) => "BQS_GEOMETRY_MALFORMED_WKT",
            GeometryError::UnsupportedType(_) => "BQS_GEOMETRY_UNSUPPORTED_TYPE",
            GeometryError::InvalidCoordinate(_) => "BQS_GEOMETRY_INVALID_COORDINATE",
            GeometryError::WrongArity { .. } => "BQS_GEOMETRY_WRONG_ARITY",
            GeometryError::UnknownUnit(_) => "BQS_GEOMETRY_UNKNOWN_UNIT",
            GeometryError::DmsUnsupported(_) => "BQS_GEOMETRY_DMS_UNSUPPORTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            GeometryError::MalformedWkt("x".into()).code(),
            "BQS_GEOMETRY_MALFORMED_WKT"
        );
        assert_eq!(
            GeometryError::DmsUnsupported("10:20:30N".into()).code(),
            "BQS_GEOMETRY_DMS_UNSUPPORTED"
        );
    }

    #[test]
    fn test_arity_display() {
        let err = GeometryError::WrongArity {
            shape: "RECTANGLE",
            expected: "2 coordinates",
            actual: 3,
        };
        assert_eq!(err.to_string(), "RECTANGLE requires 2 coordinates, got 3");
    }
}
