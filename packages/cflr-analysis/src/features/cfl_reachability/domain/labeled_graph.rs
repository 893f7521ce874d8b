//! Labeled directed multigraph with dual adjacency indexing
//!
//! Both a forward and a reverse index are kept, each keyed first by node
//! then by label. Every binary production must efficiently answer both
//! "what does v point out at with label L?" and "what points into u with
//! label L?"; a single direction would force a linear scan per rule
//! application and lose the linear-in-output asymptotic.
//!
//! Growth is monotone: edges are never deleted or mutated.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::edge_label::{EdgeLabel, LabeledEdge};
use crate::shared::models::NodeId;

/// Adjacency of one node: label → neighbor set
pub type LabelIndex = FxHashMap<EdgeLabel, FxHashSet<NodeId>>;

/// Labeled directed multigraph keyed by (node, label)
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    /// Forward adjacency: src → label → {dst}
    forward: FxHashMap<NodeId, LabelIndex>,

    /// Reverse adjacency: dst → label → {src}
    reverse: FxHashMap<NodeId, LabelIndex>,

    /// Total distinct edges
    edge_count: usize,

    /// Per-label edge counts
    label_counts: FxHashMap<EdgeLabel, usize>,
}

/// Statistics about a labeled graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub label_counts: Vec<(EdgeLabel, usize)>,
}

impl LabeledGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated node capacity
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            forward: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            reverse: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_count: 0,
            label_counts: FxHashMap::default(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Edge Insertion and Membership
    // ═══════════════════════════════════════════════════════════════════════

    /// O(1) expected membership test
    #[inline]
    pub fn has_edge(&self, src: NodeId, dst: NodeId, label: EdgeLabel) -> bool {
        self.forward
            .get(&src)
            .and_then(|by_label| by_label.get(&label))
            .map_or(false, |dsts| dsts.contains(&dst))
    }

    /// Insert an edge if absent; returns whether insertion occurred
    ///
    /// Updates both indices together; set semantics make re-insertion a
    /// no-op. The graph does not synthesize bar twins: callers building
    /// an initial graph by hand must insert their own inverses (the
    /// solver maintains Copy/PointsTo symmetry for edges it derives).
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, label: EdgeLabel) -> bool {
        let inserted = self
            .forward
            .entry(src)
            .or_default()
            .entry(label)
            .or_default()
            .insert(dst);
        if !inserted {
            return false;
        }

        self.reverse
            .entry(dst)
            .or_default()
            .entry(label)
            .or_default()
            .insert(src);

        self.edge_count += 1;
        *self.label_counts.entry(label).or_insert(0) += 1;
        true
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Adjacency Queries
    // ═══════════════════════════════════════════════════════════════════════

    /// Forward adjacency of `src`: label → successor set
    #[inline]
    pub fn successors(&self, src: NodeId) -> Option<&LabelIndex> {
        self.forward.get(&src)
    }

    /// Reverse adjacency of `dst`: label → predecessor set
    #[inline]
    pub fn predecessors(&self, dst: NodeId) -> Option<&LabelIndex> {
        self.reverse.get(&dst)
    }

    /// Successors of `src` along `label`
    #[inline]
    pub fn targets(&self, src: NodeId, label: EdgeLabel) -> Option<&FxHashSet<NodeId>> {
        self.forward.get(&src).and_then(|by_label| by_label.get(&label))
    }

    /// Predecessors of `dst` along `label`
    #[inline]
    pub fn sources(&self, dst: NodeId, label: EdgeLabel) -> Option<&FxHashSet<NodeId>> {
        self.reverse.get(&dst).and_then(|by_label| by_label.get(&label))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Enumeration
    // ═══════════════════════════════════════════════════════════════════════

    /// Lazily enumerate every edge
    ///
    /// Order is unspecified but stable within a single enumeration.
    pub fn iter_edges(&self) -> impl Iterator<Item = LabeledEdge> + '_ {
        self.forward.iter().flat_map(|(&src, by_label)| {
            by_label.iter().flat_map(move |(&label, dsts)| {
                dsts.iter().map(move |&dst| LabeledEdge::new(src, dst, label))
            })
        })
    }

    /// Lazily enumerate every (src, dst) pair carrying `label`
    pub fn edges_with_label(&self, label: EdgeLabel) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.forward.iter().flat_map(move |(&src, by_label)| {
            by_label
                .get(&label)
                .into_iter()
                .flat_map(move |dsts| dsts.iter().map(move |&dst| (src, dst)))
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Statistics
    // ═══════════════════════════════════════════════════════════════════════

    /// Total distinct edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Distinct edges carrying `label`
    #[inline]
    pub fn label_count(&self, label: EdgeLabel) -> usize {
        self.label_counts.get(&label).copied().unwrap_or(0)
    }

    /// Nodes touched by at least one edge
    pub fn node_count(&self) -> usize {
        let mut nodes: FxHashSet<NodeId> = FxHashSet::default();
        nodes.extend(self.forward.keys().copied());
        nodes.extend(self.reverse.keys().copied());
        nodes.len()
    }

    /// Snapshot statistics
    pub fn stats(&self) -> GraphStats {
        let mut label_counts: Vec<(EdgeLabel, usize)> = EdgeLabel::ALL
            .iter()
            .map(|&label| (label, self.label_count(label)))
            .filter(|&(_, count)| count > 0)
            .collect();
        label_counts.sort_by_key(|&(label, _)| label);

        GraphStats {
            total_nodes: self.node_count(),
            total_edges: self.edge_count,
            label_counts,
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LabeledGraph {{")?;
        writeln!(f, "  nodes: {}", self.total_nodes)?;
        writeln!(f, "  edges: {}", self.total_edges)?;
        for (label, count) in &self.label_counts {
            writeln!(f, "  {}: {}", label, count)?;
        }
        writeln!(f, "}}")
    }
}
