//! Dense vector helpers
//!
//! Products used by back-substitution and the residual checks run after a
//! solve.

use crate::parallel::parallel_map_indexed;
use crate::traits::ComplexField;
use ndarray::{Array1, Array2, ArrayView1};
use num_traits::{Float, Zero};

/// Compute the bilinear product Σ x_i * y_i (no conjugation)
#[inline]
pub fn dot<T: ComplexField>(x: ArrayView1<'_, T>, y: ArrayView1<'_, T>) -> T {
    assert_eq!(x.len(), y.len(), "Vector lengths must match for dot product");
    let mut sum = T::zero();
    for (xi, yi) in x.iter().zip(y.iter()) {
        sum += *xi * *yi;
    }
    sum
}

/// Compute the residual r = A·x − b
///
/// Rows are evaluated in parallel when the `rayon` feature is enabled.
pub fn residual<T: ComplexField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Array1<T> {
    assert_eq!(a.ncols(), x.len(), "Matrix columns must match solution length");
    assert_eq!(a.nrows(), b.len(), "Matrix rows must match right-hand side length");

    let rows = parallel_map_indexed(a.nrows(), |i| dot(a.row(i), x.view()) - b[i]);
    Array1::from(rows)
}

/// Compute max_i |(A·x − b)_i|
pub fn max_abs_residual<T: ComplexField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> T::Real {
    residual(a, x, b)
        .iter()
        .fold(T::Real::zero(), |acc, r| acc.max(r.norm()))
}
