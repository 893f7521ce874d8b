/*
 * CFLR Analysis - Whole-Program Points-to Analysis Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (NodeId, interning)
 * - features/    : Vertical slices (cfl_reachability)
 *
 * The engine formulates Andersen-style points-to analysis as
 * context-free language reachability over a labeled directed
 * multigraph and saturates it with a worklist fixpoint.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::collapsible_if)] // Readability over brevity

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{CflrError, Result};
pub use features::cfl_reachability::{
    AnalysisConfig, AnalysisResult, CflrSolver, EdgeLabel, Grammar, LabeledEdge, LabeledGraph,
    PagInput, PointsToAnalyzer, PointsToView, SolverConfig,
};
pub use shared::models::NodeId;
