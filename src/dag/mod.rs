//! Record graph (DAG)
//!
//! The wire representation of one catalog record: `root`, `entity`,
//! `attribute` and `record` nodes joined by parent→child edges. Graphs are
//! built fresh for each encode and decode call and never shared.

mod errors;
mod graph;
mod value;

pub use errors::{DagError, DagResult};
pub use graph::{Dag, DagNode, Edge, NodeId, NodeKind, Topology};
pub use value::{AbsTime, AttributeValue};
