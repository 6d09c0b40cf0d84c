//! DAG record converter
//!
//! Encodes a [`CatalogRecord`] into a record graph and decodes a received
//! graph back into a record.
//!
//! # Decode rules
//!
//! - The nearest enclosing entity decides which handler reads an attribute
//! - Identifiers inside an association subtree go to the association list
//! - Unknown enumeration values and unreadable dates leave the field unset
//! - Security leaves from every security section are folded, then written
//! - Without a type-specific section the content type is the fallback

mod decoder;
mod encoder;
mod errors;
pub mod mapping;
mod security;

use crate::config::{AdapterConfig, DEFAULT_FALLBACK_CONTENT_TYPE};
use crate::dag::Dag;
use crate::record::CatalogRecord;

pub use errors::{ConvertError, ConvertResult};
pub use security::{
    classification_rank, merge_classification, merge_policy, merge_releasability,
    ReleasabilityMerge, SecurityDescriptor,
};

/// Stateless converter; every call builds its own scratch state
#[derive(Debug, Clone, PartialEq)]
pub struct RecordConverter {
    fallback_content_type: String,
    releasability_merge: ReleasabilityMerge,
}

impl Default for RecordConverter {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_CONTENT_TYPE, ReleasabilityMerge::default())
    }
}

impl RecordConverter {
    pub fn new(fallback_content_type: impl Into<String>, releasability_merge: ReleasabilityMerge) -> Self {
        Self {
            fallback_content_type: fallback_content_type.into(),
            releasability_merge,
        }
    }

    pub fn from_config(config: &AdapterConfig) -> Self {
        Self::new(config.fallback_content_type.clone(), config.releasability_merge)
    }

    pub fn fallback_content_type(&self) -> &str {
        &self.fallback_content_type
    }

    pub fn releasability_merge(&self) -> ReleasabilityMerge {
        self.releasability_merge
    }

    /// Record → graph
    pub fn encode(&self, record: &CatalogRecord) -> ConvertResult<Dag> {
        encoder::encode(record)
    }

    /// Graph → record. The graph is validated first.
    pub fn decode(&self, dag: &Dag) -> ConvertResult<CatalogRecord> {
        decoder::decode(dag, &self.fallback_content_type, self.releasability_merge)
    }
}
