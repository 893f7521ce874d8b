//! Read-only projection over a saturated graph
//!
//! Enumerates the points-to relation and answers derived queries.
//! Constructed after `solve()`; the underlying graph is no longer
//! mutated, so every enumeration is deterministic per invocation.

use crate::features::cfl_reachability::domain::edge_label::EdgeLabel;
use crate::features::cfl_reachability::domain::labeled_graph::LabeledGraph;
use crate::features::cfl_reachability::ports::PointsToQuery;
use crate::shared::models::NodeId;

/// Points-to projection of a saturated labeled graph
#[derive(Debug, Clone, Copy)]
pub struct PointsToView<'a> {
    graph: &'a LabeledGraph,
}

impl<'a> PointsToView<'a> {
    pub fn new(graph: &'a LabeledGraph) -> Self {
        Self { graph }
    }

    /// Lazily enumerate every (pointer, object) pair
    ///
    /// No duplicates; order unspecified but deterministic per invocation.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + 'a {
        self.graph.edges_with_label(EdgeLabel::PointsTo)
    }

    /// Objects `pointer` may reference, in ascending id order
    pub fn points_to_of(&self, pointer: NodeId) -> Vec<NodeId> {
        let mut objects: Vec<NodeId> = self
            .graph
            .targets(pointer, EdgeLabel::PointsTo)
            .map(|targets| targets.iter().copied().collect())
            .unwrap_or_default();
        objects.sort_unstable();
        objects
    }

    /// Whether `a` and `b` may reference a common object
    pub fn alias(&self, a: NodeId, b: NodeId) -> bool {
        let (pts_a, pts_b) = match (
            self.graph.targets(a, EdgeLabel::PointsTo),
            self.graph.targets(b, EdgeLabel::PointsTo),
        ) {
            (Some(pts_a), Some(pts_b)) => (pts_a, pts_b),
            _ => return false,
        };
        // Probe the smaller set against the larger
        let (small, large) = if pts_a.len() <= pts_b.len() {
            (pts_a, pts_b)
        } else {
            (pts_b, pts_a)
        };
        small.iter().any(|object| large.contains(object))
    }

    /// Number of points-to pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.graph.label_count(EdgeLabel::PointsTo)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointsToQuery for PointsToView<'_> {
    fn points_to(&self, pointer: NodeId) -> Vec<NodeId> {
        self.points_to_of(pointer)
    }

    fn may_alias(&self, a: NodeId, b: NodeId) -> bool {
        self.alias(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cfl_reachability::infrastructure::cflr_solver::CflrSolver;

    #[test]
    fn test_pairs_and_queries() {
        // p = &a; q = p
        let (p, a, q) = (0, 1, 2);
        let mut graph = LabeledGraph::new();
        graph.add_edge(p, a, EdgeLabel::AddrBar);
        graph.add_edge(p, q, EdgeLabel::Copy);
        graph.add_edge(q, p, EdgeLabel::CopyBar);
        CflrSolver::default().solve(&mut graph);

        let view = PointsToView::new(&graph);
        let mut pairs: Vec<_> = view.pairs().collect();
        pairs.sort_unstable();

        assert_eq!(pairs, vec![(p, a), (q, a)]);
        assert_eq!(view.points_to_of(q), vec![a]);
        assert!(view.alias(p, q));
        assert!(!view.alias(p, a));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_empty_view() {
        let graph = LabeledGraph::new();
        let view = PointsToView::new(&graph);

        assert!(view.is_empty());
        assert_eq!(view.pairs().count(), 0);
        assert!(view.points_to_of(0).is_empty());
        assert!(!view.alias(0, 1));
    }
}
