//! Filter Expression Tree
//!
//! The compiled form of a BQS query, handed to an external search engine.
//! A node is `And`, `Or`, `Not` or a `Predicate(attribute, operator, value)`.

mod expr;
mod value;

pub use crate::geometry::GeoLiteral;
pub use expr::{Filter, Predicate};
pub use value::{FilterValue, Operator};
