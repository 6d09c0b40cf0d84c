//! Schema graph
//!
//! Immutable catalog of the entity types of a product, their attributes, and
//! the cardinalities between them.
//!
//! # Properties
//!
//! - Built once, validated at construction, never mutated afterwards
//! - Unknown entity or view names are not errors: lookups return empty
//! - Views are subgraphs reachable from a root entity; `NSIL_ALL_VIEW`
//!   covers every entity

mod catalog;
mod errors;
mod graph;
pub mod names;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use graph::{EntityGraph, SchemaBuilder, SchemaGraph};
pub use names::{EntityKind, ALL_VIEW, PRODUCT_ROOT};
pub use types::{AttributeDescriptor, Cardinality, Relationship, ValueKind};
