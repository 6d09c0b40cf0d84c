//! Query compiler
//!
//! Walks a BQS syntax tree produced by an external parser and builds a
//! filter expression tree.
//!
//! # Literal handling
//!
//! - Dates: `yyyy/MM/dd HH:mm:ss`, then `yyyy/MM/dd`, both UTC
//! - Numbers: narrowest kind per the [`NumericPolicy`]
//! - Distances: converted to meters before reaching a predicate
//! - Unreadable literals: the term is logged and dropped

mod compiler;
mod errors;
mod numeric;
mod syntax;

pub use compiler::{parse_date_literal, QueryCompiler};
pub use errors::{QueryError, QueryResult};
pub use numeric::{NumericKind, NumericPolicy};
pub use syntax::{build, walk, Rule, SyntaxNode, TreeListener};
