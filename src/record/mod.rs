//! Catalog record
//!
//! The flat, domain-side form of a product: named attributes, associated
//! record identifiers, a type tag and a content-type name.

mod enums;
pub mod keys;
mod types;

pub use enums::{
    EnumTable, ProductType, APPROVAL_STATUS, CARD_STATUS, IMAGERY_CATEGORY, SUBJECTIVE_QUALITY,
    VIDEO_ENCODING,
};
pub use types::{CatalogRecord, RecordValue};
