//! Ports (interfaces) for CFL-reachability analysis
//!
//! - **EdgeSource**: frontend contract, anything that can emit the
//!   initial terminal-labeled edges of a pointer assignment graph
//! - **PointsToQuery**: consumer contract over a solved analysis

use crate::features::cfl_reachability::domain::edge_label::LabeledEdge;
use crate::shared::models::NodeId;

/// Producer of initial terminal-labeled edges
///
/// Implementors own the inverse discipline: a source emitting `Copy`
/// must emit the matching `CopyBar`, and address-of statements must
/// arrive as `AddrBar` (the grammar consumes no other orientation).
pub trait EdgeSource: Send + Sync {
    /// The initial edge set, order irrelevant
    fn initial_edges(&self) -> Vec<LabeledEdge>;
}

impl EdgeSource for Vec<LabeledEdge> {
    fn initial_edges(&self) -> Vec<LabeledEdge> {
        self.clone()
    }
}

/// Query surface over a solved points-to relation
pub trait PointsToQuery {
    /// Objects `pointer` may reference
    fn points_to(&self, pointer: NodeId) -> Vec<NodeId>;

    /// Whether two pointers may reference a common object
    fn may_alias(&self, a: NodeId, b: NodeId) -> bool;
}
