//! Back-substitution on an upper-triangular augmented matrix

use crate::augmented::AugmentedMatrix;
use crate::error::{Phase, Result, SolverError};
use crate::traits::ComplexField;
use crate::vector_ops::dot;
use ndarray::{Array1, s};

/// Resolve `x` from `[U | c]`, last unknown first:
/// `x[i] = (c[i] - Σ_{j>i} U[i][j] * x[j]) / U[i][i]`.
///
/// Each unknown depends on all the ones after it, so this runs sequentially.
/// A diagonal entry whose magnitude does not exceed `threshold` fails with
/// [`SolverError::SingularMatrix`] in [`Phase::BackSubstitution`], and an
/// infinite or NaN diagonal or unknown fails with [`SolverError::NonFinite`].
/// No partial solution is returned.
pub fn back_substitute<T: ComplexField>(
    ab: &AugmentedMatrix<T>,
    threshold: T::Real,
) -> Result<Array1<T>> {
    let n = ab.dim();
    let data = ab.view();
    let mut x = Array1::<T>::zeros(n);

    for i in (0..n).rev() {
        let diag = data[[i, i]];
        if !diag.is_finite() {
            return Err(SolverError::NonFinite {
                phase: Phase::BackSubstitution,
                column: i,
            });
        }
        if diag.norm() <= threshold {
            return Err(SolverError::SingularMatrix {
                phase: Phase::BackSubstitution,
                column: i,
            });
        }

        let resolved = dot(data.slice(s![i, (i + 1)..n]), x.slice(s![(i + 1)..]));
        x[i] = (data[[i, n]] - resolved) / diag;
        if !x[i].is_finite() {
            return Err(SolverError::NonFinite {
                phase: Phase::BackSubstitution,
                column: i,
            });
        }
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_upper_triangular_system() {
        // 2x + y - z = 8, 0.5y + 0.5z = 1, -z = 1
        let u = array![[2.0_f64, 1.0, -1.0], [0.0, 0.5, 0.5], [0.0, 0.0, -1.0]];
        let c = array![8.0_f64, 1.0, 1.0];
        let ab = AugmentedMatrix::from_system(&u, &c).expect("valid system");

        let x = back_substitute(&ab, 0.0).expect("non-singular");

        assert_relative_eq!(x[2], -1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diagonal_system_divides_through() {
        let u = array![[2.0_f64, 0.0], [0.0, 4.0]];
        let c = array![1.0_f64, 1.0];
        let ab = AugmentedMatrix::from_system(&u, &c).expect("valid system");

        assert_eq!(back_substitute(&ab, 0.0), Ok(array![0.5, 0.25]));
    }

    #[test]
    fn test_zero_diagonal_reports_back_phase() {
        let u = array![[1.0_f64, 2.0, 3.0], [0.0, 0.0, 1.0], [0.0, 0.0, 2.0]];
        let c = array![1.0_f64, 1.0, 1.0];
        let ab = AugmentedMatrix::from_system(&u, &c).expect("valid system");

        assert_eq!(
            back_substitute(&ab, 0.0),
            Err(SolverError::SingularMatrix {
                phase: Phase::BackSubstitution,
                column: 1
            })
        );
    }

    #[test]
    fn test_sub_threshold_diagonal_is_singular() {
        let u = array![[1e-13_f64, 1.0], [0.0, 1.0]];
        let c = array![1.0_f64, 1.0];
        let ab = AugmentedMatrix::from_system(&u, &c).expect("valid system");

        assert!(back_substitute(&ab, 1e-12).unwrap_err().is_singular());
        assert!(back_substitute(&ab, 0.0).is_ok());
    }

    #[test]
    fn test_non_finite_rhs_is_rejected() {
        let u = array![[2.0_f64, 1.0], [0.0, 1.0]];
        let c = array![1.0_f64, f64::NAN];
        let ab = AugmentedMatrix::from_system(&u, &c).expect("valid system");

        assert_eq!(
            back_substitute(&ab, 0.0),
            Err(SolverError::NonFinite {
                phase: Phase::BackSubstitution,
                column: 1
            })
        );
    }

    #[test]
    fn test_infinite_diagonal_is_rejected() {
        let u = array![[f64::INFINITY, 1.0], [0.0, 1.0]];
        let c = array![1.0_f64, 1.0];
        let ab = AugmentedMatrix::from_system(&u, &c).expect("valid system");

        assert!(back_substitute(&ab, 0.0).unwrap_err().is_non_finite());
    }

    #[test]
    fn test_empty_system() {
        let ab = AugmentedMatrix::<f64>::from_rows(&[], &[]).expect("empty system");
        assert_eq!(back_substitute(&ab, 0.0), Ok(Array1::zeros(0)));
    }
}
