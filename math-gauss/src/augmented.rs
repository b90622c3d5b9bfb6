//! Augmented matrix `[A | b]`
//!
//! The single working structure of one solve. It always owns a private copy
//! of the caller's data, since forward elimination mutates it in place.

use crate::error::{Result, SolverError};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2, ArrayView2, ArrayViewMut2, s};
use num_traits::{Float, Zero};

/// `n × (n+1)` matrix holding the coefficients with the right-hand side
/// appended as column `n`.
#[derive(Debug, Clone)]
pub struct AugmentedMatrix<T: ComplexField> {
    data: Array2<T>,
    /// System dimension
    n: usize,
    /// Largest coefficient magnitude of the original `A`
    scale: T::Real,
}

impl<T: ComplexField> AugmentedMatrix<T> {
    /// Build `[A | b]` from a square matrix and a right-hand side.
    pub fn from_system(a: &Array2<T>, b: &Array1<T>) -> Result<Self> {
        let n = a.nrows();
        if a.ncols() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: a.ncols(),
            });
        }
        if b.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }

        let mut data = Array2::zeros((n, n + 1));
        data.slice_mut(s![.., ..n]).assign(a);
        data.column_mut(n).assign(b);

        Ok(Self::with_scale(data, n))
    }

    /// Build `[A | b]` from row-major rows, validating every row length.
    pub fn from_rows(rows: &[Vec<T>], b: &[T]) -> Result<Self> {
        let n = b.len();
        if rows.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: rows.len(),
            });
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            log::debug!("row {} has {} coefficients, expected {}", i, row.len(), n);
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: row.len(),
            });
        }

        let data =
            Array2::from_shape_fn((n, n + 1), |(i, j)| if j < n { rows[i][j] } else { b[i] });

        Ok(Self::with_scale(data, n))
    }

    fn with_scale(data: Array2<T>, n: usize) -> Self {
        let scale = data
            .slice(s![.., ..n])
            .iter()
            .fold(T::Real::zero(), |acc, v| acc.max(v.norm()));
        Self { data, n, scale }
    }

    /// System dimension `n`
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Largest coefficient magnitude of the original matrix.
    ///
    /// Pivot tolerances are taken relative to this value.
    pub fn scale(&self) -> T::Real {
        self.scale
    }

    /// Entry at `(row, col)`, where `col == n` is the right-hand side
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[[row, col]]
    }

    /// Read-only view of the whole `n × (n+1)` array
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    pub(crate) fn view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }

    /// Exchange rows `i` and `j`, right-hand side included.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..=self.n {
            self.data.swap([i, k], [j, k]);
        }
    }

    /// Check that every entry below the diagonal in `column` is within `tol`
    /// of zero, i.e. that the column has been eliminated.
    pub fn is_eliminated_below(&self, column: usize, tol: T::Real) -> bool {
        ((column + 1)..self.n).all(|j| self.data[[j, column]].norm() <= tol)
    }

    /// Check that the coefficient block is upper triangular within `tol`.
    pub fn is_upper_triangular(&self, tol: T::Real) -> bool {
        (0..self.n).all(|column| self.is_eliminated_below(column, tol))
    }

    /// Consume the matrix and return the underlying array
    pub fn into_inner(self) -> Array2<T> {
        self.data
    }
}
