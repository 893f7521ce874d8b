//! Application layer for CFL-reachability analysis
//!
//! Use cases on top of the domain + infrastructure:
//! - **PointsToAnalyzer**: statement-level facade (name interning, graph
//!   construction, one-call solve)
//! - **PointsToView**: read-only projection of the points-to relation
//! - **PagInput**: JSON pointer-assignment-graph ingestion for the CLI

pub mod analyzer;
pub mod pag_input;
pub mod result_view;

pub use analyzer::{AnalysisConfig, AnalysisResult, AnalysisStats, PointsToAnalyzer};
pub use pag_input::PagInput;
pub use result_view::PointsToView;
