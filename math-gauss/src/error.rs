//! Error types for the Gaussian elimination solver.
//!
//! Solver failures are deterministic: the same system always fails the same
//! way, so none of these errors are meant to be retried.

use std::fmt;
use thiserror::Error;

/// Elimination phase in which a problem was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pivot search during forward elimination
    Forward,
    /// Diagonal division during back-substitution
    BackSubstitution,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Forward => write!(f, "forward elimination"),
            Phase::BackSubstitution => write!(f, "back-substitution"),
        }
    }
}

/// Errors that can occur while solving a dense linear system.
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// Right-hand side or matrix rows do not match the system dimension.
    #[error("matrix dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension implied by the system
        expected: usize,
        /// Dimension actually supplied
        got: usize,
    },

    /// No usable pivot: the matrix is singular to working precision.
    #[error("matrix is singular or nearly singular (detected during {phase} at column {column})")]
    SingularMatrix {
        /// Phase that detected the singularity
        phase: Phase,
        /// Pivot column (forward) or unknown index (back-substitution)
        column: usize,
    },

    /// An infinite or NaN value reached a pivot or the solution, either from
    /// the input or from overflow during elimination.
    #[error("non-finite value encountered during {phase} at column {column}")]
    NonFinite {
        /// Phase that met the value
        phase: Phase,
        /// Pivot column (forward) or unknown index (back-substitution)
        column: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if the matrix was found to be singular in either phase.
    pub fn is_singular(&self) -> bool {
        matches!(self, SolverError::SingularMatrix { .. })
    }

    /// Returns `true` if the input shapes were inconsistent.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, SolverError::DimensionMismatch { .. })
    }

    /// Returns `true` if an infinite or NaN value stopped the solve.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, SolverError::NonFinite { .. })
    }

    /// Phase that stopped the solve, for numeric errors.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            SolverError::SingularMatrix { phase, .. } | SolverError::NonFinite { phase, .. } => {
                Some(*phase)
            }
            SolverError::DimensionMismatch { .. } => None,
        }
    }
}
