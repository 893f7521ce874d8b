//! Domain models for CFL-reachability analysis
//!
//! Core abstractions independent of the solving algorithm:
//! - EdgeLabel: the doubled label alphabet (each core relation has a bar twin)
//! - LabeledGraph: dual-index labeled multigraph
//! - Grammar: the fixed context-free production set

pub mod edge_label;
pub mod grammar;
pub mod labeled_graph;

pub use edge_label::{EdgeLabel, LabeledEdge};
pub use grammar::{Grammar, Production};
pub use labeled_graph::{GraphStats, LabeledGraph};
