//! Partial pivot selection

use crate::augmented::AugmentedMatrix;
use crate::error::{Phase, Result, SolverError};
use crate::traits::ComplexField;
use num_traits::Zero;

/// Find the row in `column..n` holding the largest-magnitude entry of
/// `column`.
///
/// Ties keep the topmost row. A maximum that does not exceed `threshold` means
/// the matrix is singular to working precision at this column, so a zero pivot
/// is always rejected. An infinite or NaN candidate fails with
/// [`SolverError::NonFinite`]. The scan is read-only: the caller swaps the
/// returned row into place.
///
/// # Panics
///
/// Panics if `column >= ab.dim()`.
pub fn select_pivot<T: ComplexField>(
    ab: &AugmentedMatrix<T>,
    column: usize,
    threshold: T::Real,
) -> Result<usize> {
    let n = ab.dim();
    assert!(
        column < n,
        "pivot column {column} out of range for a {n}x{n} system"
    );

    let mut max_val = T::Real::zero();
    let mut max_row = column;

    for row in column..n {
        let entry = ab.get(row, column);
        if !entry.is_finite() {
            return Err(SolverError::NonFinite {
                phase: Phase::Forward,
                column,
            });
        }
        let val = entry.norm();
        if val > max_val {
            max_val = val;
            max_row = row;
        }
    }

    if max_val <= threshold {
        return Err(SolverError::SingularMatrix {
            phase: Phase::Forward,
            column,
        });
    }

    Ok(max_row)
}
