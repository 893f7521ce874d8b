//! # CFL-Reachability Points-to Analysis
//!
//! Whole-program, inclusion-based pointer analysis formulated as
//! context-free language reachability (CFL-R) over a labeled directed
//! multigraph:
//! - **LabeledGraph**: dual-index (forward + reverse) adjacency keyed by
//!   node then label
//! - **Grammar**: the fixed production set over edge labels, with bar
//!   twins for reversed traversal
//! - **CflrSolver**: worklist fixpoint that saturates the graph under the
//!   grammar (cubic Andersen closure)
//! - **PointsToView**: read-only projection of the points-to relation
//!
//! ## Academic References
//! - Reps, T. "Program Analysis via Graph Reachability" (ILPS 1997)
//! - Melski & Reps "Interconvertibility of a Class of Set Constraints and
//!   Context-Free-Language Reachability" (TCS 2000)
//! - Andersen, L. O. "Program Analysis and Specialization for C" (PhD 1994)
//! - Zheng & Rugina "Demand-Driven Alias Analysis for C" (POPL 2008)
//!
//! ## Usage
//! ```text
//! use cflr_analysis::features::cfl_reachability::PointsToAnalyzer;
//!
//! let mut analyzer = PointsToAnalyzer::default();
//!
//! // p = &a; q = p;
//! analyzer.add_address_of("p", "a");
//! analyzer.add_copy("q", "p");
//!
//! let result = analyzer.solve();
//! assert!(analyzer.view().points_to_names("q").contains(&"a".to_string()));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for public API
pub use application::analyzer::{AnalysisConfig, AnalysisResult, AnalysisStats, PointsToAnalyzer};
pub use application::pag_input::PagInput;
pub use application::result_view::PointsToView;
pub use domain::edge_label::{EdgeLabel, LabeledEdge};
pub use domain::grammar::{Grammar, Production};
pub use domain::labeled_graph::{GraphStats, LabeledGraph};
pub use infrastructure::cflr_solver::{CflrSolver, SolverConfig, SolverStats};
pub use infrastructure::worklist::Worklist;
