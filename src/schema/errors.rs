//! Schema construction errors
//!
//! Raised only while building a schema graph. A built graph is immutable and
//! its lookups never fail.

use thiserror::Error;

use super::names::EntityKind;

/// Result type for schema construction
pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Entity declared twice
    #[error("Entity '{0}' declared more than once")]
    DuplicateEntity(EntityKind),

    /// Two attributes of one entity share a name
    #[error("Attribute '{attribute}' declared more than once on '{entity}'")]
    DuplicateAttribute {
        entity: EntityKind,
        attribute: &'static str,
    },

    /// Relationship names an entity that was never declared
    #[error("Relationship {parent} -> {child} names undeclared entity '{missing}'")]
    UndeclaredEntity {
        parent: EntityKind,
        child: EntityKind,
        missing: EntityKind,
    },

    /// Same parent/child pair related twice
    #[error("Relationship {parent} -> {child} declared more than once")]
    DuplicateRelationship {
        parent: EntityKind,
        child: EntityKind,
    },

    /// Entity related to itself
    #[error("Entity '{0}' cannot be related to itself")]
    SelfRelationship(EntityKind),

    /// View declared twice
    #[error("View '{0}' declared more than once")]
    DuplicateView(String),

    /// View rooted at an undeclared entity
    #[error("View '{view}' is rooted at undeclared entity '{root}'")]
    UndeclaredViewRoot { view: String, root: EntityKind },
}

impl SchemaError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::DuplicateEntity(_) => "BQS_SCHEMA_DUPLICATE_ENTITY",
            SchemaError::DuplicateAttribute { .. } => "BQS_SCHEMA_DUPLICATE_ATTRIBUTE",
            SchemaError::UndeclaredEntity { .. } => "BQS_SCHEMA_UNDECLARED_ENTITY",
            SchemaError::DuplicateRelationship { .. } => "BQS_SCHEMA_DUPLICATE_RELATIONSHIP",
            SchemaError::SelfRelationship(_) => "BQS_SCHEMA_SELF_RELATIONSHIP",
            SchemaError::DuplicateView(_) => "BQS_SCHEMA_DUPLICATE_VIEW",
            SchemaError::UndeclaredViewRoot { .. } => "BQS_SCHEMA_UNDECLARED_VIEW_ROOT",
        }
    }
}
