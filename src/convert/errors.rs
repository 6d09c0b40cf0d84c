//! Record conversion errors

use thiserror::Error;

use crate::dag::DagError;
use crate::geometry::GeometryError;
use crate::schema::ValueKind;

/// Result type for encode and decode
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Received graph is structurally invalid
    #[error("Invalid record graph: {0}")]
    Dag(#[from] DagError),

    /// Geometry text could not be read
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// Integer does not fit the attribute's wire kind
    #[error("Value {value} of '{key}' does not fit wire kind {kind}")]
    OutOfRange {
        key: String,
        value: i64,
        kind: ValueKind,
    },
}

impl ConvertError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::Dag(e) => e.code(),
            ConvertError::Geometry(e) => e.code(),
            ConvertError::OutOfRange { .. } => "BQS_CONVERT_OUT_OF_RANGE",
        }
    }
}
