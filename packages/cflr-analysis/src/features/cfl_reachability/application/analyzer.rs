//! High-level points-to analyzer
//!
//! Statement-level facade over the CFL-reachability engine: interns
//! symbolic names to dense node ids, translates pointer statements to
//! terminal-labeled edges, runs the solver, and exposes the result.
//!
//! The facade closes the one-sided-initial-Copy trap: `add_copy` always
//! inserts the CopyBar twin, and `add_address_of` inserts both Addr and
//! AddrBar, so graphs built through it can never under-derive.
//!
//! # Usage
//! ```text
//! use cflr_analysis::features::cfl_reachability::PointsToAnalyzer;
//!
//! let mut analyzer = PointsToAnalyzer::default();
//! analyzer.add_address_of("p", "a"); // p = &a
//! analyzer.add_copy("q", "p");       // q = p
//!
//! let result = analyzer.solve();
//! assert_eq!(result.stats.points_to_edges, 2);
//! ```

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::errors::Result;
use crate::features::cfl_reachability::domain::edge_label::EdgeLabel;
use crate::features::cfl_reachability::domain::labeled_graph::LabeledGraph;
use crate::features::cfl_reachability::infrastructure::cflr_solver::{CflrSolver, SolverConfig};
use crate::features::cfl_reachability::ports::EdgeSource;
use crate::shared::models::NodeId;
use crate::shared::utils::interner::NodeInterner;

use super::result_view::PointsToView;

/// Analysis configuration
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Solver settings
    pub solver: SolverConfig,
}

/// Analysis result with unified statistics
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub stats: AnalysisStats,
}

/// Unified statistics
#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    pub variables: usize,
    pub edges_initial: usize,
    pub edges_derived: usize,
    pub edges_total: usize,
    pub points_to_edges: usize,
    pub pops: usize,
    pub duration_ms: f64,
}

/// High-level points-to analyzer
#[derive(Debug, Default)]
pub struct PointsToAnalyzer {
    /// Configuration
    config: AnalysisConfig,

    /// Name ↔ dense id table
    interner: NodeInterner,

    /// The pointer assignment graph, saturated in place by `solve()`
    graph: LabeledGraph,
}

impl PointsToAnalyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            interner: NodeInterner::new(),
            graph: LabeledGraph::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Statement API (name-based)
    // ═══════════════════════════════════════════════════════════════════════

    /// `pointer = &object`
    ///
    /// Emits both orientations (Addr object → pointer, AddrBar
    /// pointer → object); the grammar consumes only AddrBar.
    pub fn add_address_of(&mut self, pointer: &str, object: &str) {
        let pointer = self.interner.intern(pointer);
        let object = self.interner.intern(object);
        self.graph.add_edge(object, pointer, EdgeLabel::Addr);
        self.graph.add_edge(pointer, object, EdgeLabel::AddrBar);
    }

    /// `dst = src`
    ///
    /// Emits Copy src → dst and its CopyBar twin.
    pub fn add_copy(&mut self, dst: &str, src: &str) {
        let dst = self.interner.intern(dst);
        let src = self.interner.intern(src);
        self.graph.add_edge(src, dst, EdgeLabel::Copy);
        self.graph.add_edge(dst, src, EdgeLabel::CopyBar);
    }

    /// `*pointer = value`
    pub fn add_store(&mut self, pointer: &str, value: &str) {
        let pointer = self.interner.intern(pointer);
        let value = self.interner.intern(value);
        self.graph.add_edge(value, pointer, EdgeLabel::Store);
    }

    /// `dst = *pointer`
    pub fn add_load(&mut self, dst: &str, pointer: &str) {
        let dst = self.interner.intern(dst);
        let pointer = self.interner.intern(pointer);
        self.graph.add_edge(pointer, dst, EdgeLabel::Load);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Edge API (id-based, for frontends that manage their own ids)
    // ═══════════════════════════════════════════════════════════════════════

    /// Insert a raw labeled edge; the caller owns inverse discipline
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, label: EdgeLabel) -> bool {
        self.graph.add_edge(src, dst, label)
    }

    /// Drain an edge source (frontend port) into the graph
    pub fn add_initial_edges(&mut self, source: &dyn EdgeSource) {
        for edge in source.initial_edges() {
            self.graph.add_edge(edge.src, edge.dst, edge.label);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Solving
    // ═══════════════════════════════════════════════════════════════════════

    /// Saturate the graph and return run statistics
    pub fn solve(&mut self) -> AnalysisResult {
        let start = Instant::now();
        debug!(
            variables = self.interner.len(),
            edges = self.graph.edge_count(),
            "starting CFL-R saturation"
        );

        let mut solver = CflrSolver::new(self.config.solver.clone());
        let solver_stats = solver.solve(&mut self.graph);

        let stats = AnalysisStats {
            variables: self.interner.len(),
            edges_initial: solver_stats.edges_initial,
            edges_derived: solver_stats.edges_derived,
            edges_total: solver_stats.edges_total,
            points_to_edges: solver_stats.points_to_edges,
            pops: solver_stats.pops,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            derived = stats.edges_derived,
            points_to = stats.points_to_edges,
            "saturation reached quiescence"
        );

        AnalysisResult { stats }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries and Result Dump
    // ═══════════════════════════════════════════════════════════════════════

    /// Read-only projection of the points-to relation
    pub fn view(&self) -> PointsToView<'_> {
        PointsToView::new(&self.graph)
    }

    /// The underlying graph (read-only)
    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    /// Look up a node id by name
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.interner.get(name)
    }

    /// Look up a node name by id
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.interner.name(id)
    }

    /// Objects `pointer` may reference, by name, sorted
    pub fn points_to_names(&self, pointer: &str) -> Vec<String> {
        let Some(id) = self.interner.get(pointer) else {
            return Vec::new();
        };
        let mut names: Vec<String> = self
            .view()
            .points_to_of(id)
            .into_iter()
            .filter_map(|object| self.interner.name(object))
            .map(|name| name.to_string())
            .collect();
        names.sort_unstable();
        names
    }

    /// Human-readable dump of the points-to relation, sorted by pointer
    ///
    /// One line per pointer with a non-empty set: `p -> {a, o}`.
    pub fn dump_result(&self) -> String {
        let mut out = String::new();
        for (pointer, objects) in self.points_to_by_name() {
            out.push_str(&pointer);
            out.push_str(" -> {");
            out.push_str(&objects.join(", "));
            out.push_str("}\n");
        }
        out
    }

    /// JSON export of the points-to relation
    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct PointsToReport {
            points_to: BTreeMap<String, Vec<String>>,
        }

        let report = PointsToReport {
            points_to: self.points_to_by_name(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn points_to_by_name(&self) -> BTreeMap<String, Vec<String>> {
        let mut by_name: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (pointer, object) in self.view().pairs() {
            let (Some(pointer), Some(object)) =
                (self.interner.name(pointer), self.interner.name(object))
            else {
                continue;
            };
            by_name
                .entry(pointer.to_string())
                .or_default()
                .push(object.to_string());
        }
        for objects in by_name.values_mut() {
            objects.sort_unstable();
        }
        by_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_and_copy() {
        let mut analyzer = PointsToAnalyzer::default();
        analyzer.add_address_of("p", "a");
        analyzer.add_copy("q", "p");

        let result = analyzer.solve();

        assert_eq!(result.stats.points_to_edges, 2);
        assert_eq!(analyzer.points_to_names("p"), vec!["a"]);
        assert_eq!(analyzer.points_to_names("q"), vec!["a"]);
    }

    #[test]
    fn test_store_load_through_object() {
        let mut analyzer = PointsToAnalyzer::default();
        analyzer.add_address_of("p", "o");
        analyzer.add_address_of("q", "o");
        analyzer.add_store("p", "x"); // *p = x
        analyzer.add_load("y", "q"); // y = *q

        analyzer.solve();

        let x = analyzer.node_id("x").unwrap();
        let y = analyzer.node_id("y").unwrap();
        assert!(analyzer.graph().has_edge(x, y, EdgeLabel::Copy));
    }

    #[test]
    fn test_unknown_pointer_has_empty_set() {
        let mut analyzer = PointsToAnalyzer::default();
        analyzer.add_address_of("p", "a");
        analyzer.solve();

        assert!(analyzer.points_to_names("nothing").is_empty());
    }

    #[test]
    fn test_dump_is_sorted_and_stable() {
        let mut analyzer = PointsToAnalyzer::default();
        analyzer.add_address_of("q", "b");
        analyzer.add_address_of("p", "b");
        analyzer.add_address_of("p", "a");
        analyzer.solve();

        let dump = analyzer.dump_result();
        assert_eq!(dump, "p -> {a, b}\nq -> {b}\n");
        assert_eq!(dump, analyzer.dump_result());
    }

    #[test]
    fn test_json_export() {
        let mut analyzer = PointsToAnalyzer::default();
        analyzer.add_address_of("p", "a");
        analyzer.solve();

        let json = analyzer.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["points_to"]["p"][0], "a");
    }

    #[test]
    fn test_alias_query_through_view() {
        let mut analyzer = PointsToAnalyzer::default();
        analyzer.add_address_of("p", "o");
        analyzer.add_copy("q", "p");
        analyzer.add_address_of("r", "other");
        analyzer.solve();

        let p = analyzer.node_id("p").unwrap();
        let q = analyzer.node_id("q").unwrap();
        let r = analyzer.node_id("r").unwrap();

        assert!(analyzer.view().alias(p, q));
        assert!(!analyzer.view().alias(p, r));
    }
}
