//! Infrastructure layer for CFL-reachability analysis
//!
//! - **Worklist**: FIFO queue of candidate edges awaiting rule application
//! - **CflrSolver**: worklist fixpoint engine (cubic Andersen closure)

pub mod cflr_solver;
pub mod worklist;

pub use cflr_solver::{CflrSolver, SolverConfig, SolverStats};
pub use worklist::Worklist;
