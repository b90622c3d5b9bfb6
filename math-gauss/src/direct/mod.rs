//! Direct solvers for dense linear systems
//!
//! Gaussian elimination with partial pivoting, split into its phases:
//! - [`select_pivot`]: largest-magnitude pivot search
//! - [`eliminate_column`]: row reduction below the pivot (parallel fan-out)
//! - [`back_substitute`]: sequential resolution of the unknowns
//! - [`LinearSolver`] / [`gauss_solve`]: the full solve

mod back_substitution;
mod eliminate;
mod gauss;
mod pivot;

pub use back_substitution::back_substitute;
pub use eliminate::eliminate_column;
pub use gauss::{
    DEFAULT_PARALLEL_MIN_ROWS, DEFAULT_PIVOT_TOLERANCE, ElimStrategy, GaussConfig, LinearSolver,
    gauss_solve,
};
pub use pivot::select_pivot;
