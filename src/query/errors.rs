//! # Query Errors
//!
//! Literal-level problems never reach these types: the offending term is
//! logged and dropped. These cover trees the compiler cannot walk at all.

use thiserror::Error;

use super::syntax::Rule;

/// Result type for query compilation
pub type QueryResult<T> = Result<T, QueryError>;

/// Query compilation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Tree root is not a `query` node
    #[error("Expected a query node at the root, found {0:?}")]
    UnexpectedRoot(Rule),

    /// Tree JSON could not be read
    #[error("Malformed syntax tree: {0}")]
    MalformedTree(String),
}

impl QueryError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::UnexpectedRoot(_) => "BQS_QUERY_UNEXPECTED_ROOT",
            QueryError::MalformedTree(_) => "BQS_QUERY_MALFORMED_TREE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            QueryError::UnexpectedRoot(Rule::Term).code(),
            "BQS_QUERY_UNEXPECTED_ROOT"
        );
        assert!(QueryError::UnexpectedRoot(Rule::Term)
            .to_string()
            .contains("Term"));
    }
}
