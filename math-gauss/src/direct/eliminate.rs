//! Row reduction below a pivot
//!
//! For pivot column `i`, every row `j > i` is updated as
//! `Ab[j][k] -= (Ab[j][i] / Ab[i][i]) * Ab[i][k]` for `k` in `i..=n`.
//! A row update reads only the pivot row and its own row, so rows are
//! independent and can be reduced concurrently.

use crate::augmented::AugmentedMatrix;
use crate::parallel::{parallel_for_each_row, sequential_for_each_row};
use crate::traits::ComplexField;
use ndarray::{ArrayView1, ArrayViewMut1, Axis, Zip, s};

/// Reduce every row below `column` against the pivot row `column`.
///
/// The pivot row must already be swapped into position. When `parallel` is
/// set, rows are fanned out across the worker pool; the call returns only
/// after all of them are done, so the caller can move on to the next column.
/// Both paths perform identical arithmetic per row and give bit-identical
/// results.
pub fn eliminate_column<T: ComplexField>(
    ab: &mut AugmentedMatrix<T>,
    column: usize,
    parallel: bool,
) {
    let n = ab.dim();
    if column + 1 >= n {
        return;
    }

    // rows 0..=column are only read from here on, rows below are written disjointly
    let (upper, lower) = ab.view_mut().split_at(Axis(0), column + 1);
    let pivot_row = upper.row(column);

    if parallel {
        parallel_for_each_row(lower, |row| reduce_row(row, pivot_row, column));
    } else {
        sequential_for_each_row(lower, |row| reduce_row(row, pivot_row, column));
    }
}

/// Subtract the multiple of `pivot_row` that zeroes `row[column]`.
#[inline]
fn reduce_row<T: ComplexField>(
    mut row: ArrayViewMut1<'_, T>,
    pivot_row: ArrayView1<'_, T>,
    column: usize,
) {
    let factor = row[column] / pivot_row[column];

    Zip::from(row.slice_mut(s![column..]))
        .and(pivot_row.slice(s![column..]))
        .for_each(|r, &p| *r -= factor * p);

    // exact zero below the pivot, rounding residue is not kept
    row[column] = T::zero();
}
