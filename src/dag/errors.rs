//! Record graph error types

use thiserror::Error;

use super::graph::NodeId;

/// Result type for record graph operations
pub type DagResult<T> = Result<T, DagError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DagError {
    /// Graph does not have exactly one root node
    #[error("Expected exactly one root node, found {0}")]
    RootCount(usize),

    /// Two nodes share an id
    #[error("Node id {0} used more than once")]
    DuplicateNode(NodeId),

    /// Edge refers to a node that does not exist
    #[error("Edge {parent} -> {child} refers to unknown node {missing}")]
    UnknownNode {
        parent: NodeId,
        child: NodeId,
        missing: NodeId,
    },

    /// Root node appears as a child
    #[error("Root node {0} has a parent")]
    RootHasParent(NodeId),

    /// Parent links form a cycle
    #[error("Cycle detected through node {0}")]
    Cycle(NodeId),

    /// Attribute node without a value
    #[error("Attribute node {id} '{name}' carries no value")]
    MissingValue { id: NodeId, name: String },

    /// Attribute node used as a parent
    #[error("Attribute node {0} cannot have children")]
    AttributeHasChildren(NodeId),
}

impl DagError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DagError::RootCount(_) => "BQS_DAG_ROOT_COUNT",
            DagError::DuplicateNode(_) => "BQS_DAG_DUPLICATE_NODE",
            DagError::UnknownNode { .. } => "BQS_DAG_UNKNOWN_NODE",
            DagError::RootHasParent(_) => "BQS_DAG_ROOT_HAS_PARENT",
            DagError::Cycle(_) => "BQS_DAG_CYCLE",
            DagError::MissingValue { .. } => "BQS_DAG_MISSING_VALUE",
            DagError::AttributeHasChildren(_) => "BQS_DAG_ATTRIBUTE_HAS_CHILDREN",
        }
    }
}
