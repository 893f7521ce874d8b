//! CFL-reachability fixpoint solver
//!
//! Worklist-driven transitive closure under the grammar:
//! 1. Seed the worklist with every edge in the graph
//! 2. Pop an edge and apply every production it can participate in:
//!    unary match, right-match against successors of its target, and
//!    left-match against predecessors of its source
//! 3. Symmetry-maintaining insertion keeps the Copy/CopyBar and
//!    PointsTo/PointsToBar twins in lock-step
//! 4. Quiescence (empty worklist) is the fixpoint
//!
//! Both match phases must run on every pop: a popped edge may be either
//! operand of a future join, and doing only one direction yields an
//! incomplete closure.
//!
//! Termination: the edge universe is finite (|V|² × |labels|) and growth
//! is monotone, so the drain loop is bounded. Time is O(|V|³) worst case
//! for this grammar (cubic Andersen); space is O(|V|² · |labels|).

use std::time::Instant;

use crate::features::cfl_reachability::domain::edge_label::{EdgeLabel, LabeledEdge};
use crate::features::cfl_reachability::domain::grammar::Grammar;
use crate::features::cfl_reachability::domain::labeled_graph::LabeledGraph;
use crate::shared::models::NodeId;

use super::worklist::Worklist;

/// Solver configuration
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum worklist pops (0 = unlimited)
    ///
    /// The fixpoint terminates on its own; the valve only guards runs on
    /// pathological inputs.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_iterations: 0 }
    }
}

/// Statistics for one saturation run
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    pub edges_initial: usize,
    pub edges_derived: usize,
    pub edges_total: usize,
    pub points_to_edges: usize,
    pub pops: usize,
    pub duration_ms: f64,
}

/// Worklist fixpoint engine
pub struct CflrSolver {
    config: SolverConfig,
    stats: SolverStats,
}

impl Default for CflrSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl CflrSolver {
    /// Create a new solver
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            stats: SolverStats::default(),
        }
    }

    /// Saturate `graph` under the grammar; runs to quiescence
    ///
    /// The graph is mutated in place and is read-only to consumers after
    /// this returns. Solving an already-saturated graph is a no-op.
    pub fn solve(&mut self, graph: &mut LabeledGraph) -> SolverStats {
        let start = Instant::now();
        self.stats = SolverStats {
            edges_initial: graph.edge_count(),
            ..Default::default()
        };

        // Seed: every existing edge is a candidate operand
        let mut worklist = Worklist::with_capacity(graph.edge_count());
        for edge in graph.iter_edges() {
            worklist.push(edge);
        }

        while let Some(edge) = worklist.pop() {
            self.stats.pops += 1;
            if self.config.max_iterations > 0 && self.stats.pops > self.config.max_iterations {
                #[cfg(feature = "trace")]
                eprintln!(
                    "[CFLR] WARNING: exceeded max iterations ({})",
                    self.config.max_iterations
                );
                break;
            }

            let LabeledEdge { src, dst, label } = edge;

            // Unary match
            if let Some(output) = Grammar::unary_output(label) {
                self.insert(graph, &mut worklist, src, dst, output);
            }

            // Right-match: popped edge is the left operand, partner edges
            // leave its target
            for production in Grammar::with_left(label) {
                let partners: Vec<NodeId> = match graph.targets(dst, production.right) {
                    Some(targets) => targets.iter().copied().collect(),
                    None => continue,
                };
                for w in partners {
                    self.insert(graph, &mut worklist, src, w, production.output);
                }
            }

            // Left-match: popped edge is the right operand, partner edges
            // enter its source
            for production in Grammar::with_right(label) {
                let partners: Vec<NodeId> = match graph.sources(src, production.left) {
                    Some(sources) => sources.iter().copied().collect(),
                    None => continue,
                };
                for w in partners {
                    self.insert(graph, &mut worklist, w, dst, production.output);
                }
            }
        }

        self.stats.edges_total = graph.edge_count();
        self.stats.points_to_edges = graph.label_count(EdgeLabel::PointsTo);
        self.stats.duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.stats.clone()
    }

    /// Symmetry-maintaining insertion
    ///
    /// No-op if the edge exists. A fresh PointsTo or Copy edge also
    /// inserts and enqueues its reversed bar twin; no other label
    /// induces an automatic inverse.
    fn insert(
        &mut self,
        graph: &mut LabeledGraph,
        worklist: &mut Worklist,
        src: NodeId,
        dst: NodeId,
        label: EdgeLabel,
    ) {
        if !graph.add_edge(src, dst, label) {
            return;
        }
        self.stats.edges_derived += 1;
        worklist.push(LabeledEdge::new(src, dst, label));

        #[cfg(feature = "trace")]
        eprintln!("[CFLR] derived {}", LabeledEdge::new(src, dst, label));

        let twin = match label {
            EdgeLabel::PointsTo => Some(EdgeLabel::PointsToBar),
            EdgeLabel::Copy => Some(EdgeLabel::CopyBar),
            _ => None,
        };
        if let Some(twin) = twin {
            if graph.add_edge(dst, src, twin) {
                self.stats.edges_derived += 1;
                worklist.push(LabeledEdge::new(dst, src, twin));

                #[cfg(feature = "trace")]
                eprintln!("[CFLR] derived {}", LabeledEdge::new(dst, src, twin));
            }
        }
    }

    /// Statistics of the last run
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }
}
