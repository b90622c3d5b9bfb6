//! Gaussian elimination solver
//!
//! Forward elimination with partial pivoting, row reduction fanned out per
//! pivot column, then sequential back-substitution.

use crate::augmented::AugmentedMatrix;
use crate::direct::back_substitution::back_substitute;
use crate::direct::eliminate::eliminate_column;
use crate::direct::pivot::select_pivot;
use crate::error::Result;
use crate::parallel::{is_parallel_available, worker_count};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::{Float, FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::thread::{self, JoinHandle};

/// Default relative pivot tolerance
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Default number of rows below the pivot from which [`ElimStrategy::Auto`]
/// fans out
pub const DEFAULT_PARALLEL_MIN_ROWS: usize = 64;

/// How rows below the pivot are reduced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElimStrategy {
    /// Parallel once enough rows remain below the pivot
    #[default]
    Auto,
    /// Always on the calling thread
    Sequential,
    /// Always fanned out (sequential if built without `rayon`)
    Parallel,
}

impl ElimStrategy {
    /// Whether a column with `rows_below` rows to reduce should fan out
    pub fn fans_out(self, rows_below: usize, min_rows: usize) -> bool {
        match self {
            ElimStrategy::Sequential => false,
            ElimStrategy::Parallel => is_parallel_available(),
            ElimStrategy::Auto => is_parallel_available() && rows_below >= min_rows,
        }
    }
}

/// Gaussian elimination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussConfig {
    /// Pivot tolerance relative to the largest coefficient magnitude of `A`.
    /// A pivot whose magnitude does not exceed `pivot_tolerance * max|A_ij|` is
    /// treated as zero. `0.0` only rejects exact zeros.
    ///
    /// The bound is global, not per row: when rows differ in scale by more
    /// than `1 / pivot_tolerance`, a regular system such as
    /// `diag(1e13, 1)` is reported singular. Rescale the rows or lower the
    /// tolerance for such inputs.
    pub pivot_tolerance: f64,
    /// Row reduction strategy
    pub strategy: ElimStrategy,
    /// Minimum rows below the pivot for [`ElimStrategy::Auto`] to fan out
    pub parallel_min_rows: usize,
    /// Log progress every N pivot columns (0 = no output)
    pub log_interval: usize,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            strategy: ElimStrategy::Auto,
            parallel_min_rows: DEFAULT_PARALLEL_MIN_ROWS,
            log_interval: 0,
        }
    }
}

/// Dense linear system solver
///
/// Each call works on a private augmented copy of its inputs, so one solver
/// can be shared across threads and the caller's data is never modified.
#[derive(Debug, Clone, Default)]
pub struct LinearSolver {
    config: GaussConfig,
}

impl LinearSolver {
    /// Create a solver with the given configuration
    pub fn new(config: GaussConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &GaussConfig {
        &self.config
    }

    /// Solve `A x = b`
    ///
    /// # Errors
    ///
    /// - [`SolverError::DimensionMismatch`](crate::SolverError::DimensionMismatch)
    ///   if `A` is not square or `b` has the wrong length
    /// - [`SolverError::SingularMatrix`](crate::SolverError::SingularMatrix)
    ///   if no usable pivot exists in some column
    pub fn solve<T: ComplexField>(&self, a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
        let mut ab = AugmentedMatrix::from_system(a, b)?;
        self.solve_augmented(&mut ab)
    }

    /// Solve `A x = b` with `A` given as rows, validating every row length
    pub fn solve_rows<T: ComplexField>(&self, rows: &[Vec<T>], b: &[T]) -> Result<Array1<T>> {
        let mut ab = AugmentedMatrix::from_rows(rows, b)?;
        self.solve_augmented(&mut ab)
    }

    /// Run the forward phase only and return the upper-triangular `[U | c]`
    pub fn factorize<T: ComplexField>(
        &self,
        a: &Array2<T>,
        b: &Array1<T>,
    ) -> Result<AugmentedMatrix<T>> {
        let mut ab = AugmentedMatrix::from_system(a, b)?;
        self.forward_eliminate(&mut ab)?;
        Ok(ab)
    }

    /// Reduce `ab` to upper-triangular form in place.
    ///
    /// For each column the pivot is selected and swapped in before any row
    /// is reduced, and every row of that column is reduced before the next
    /// pivot search.
    pub fn forward_eliminate<T: ComplexField>(&self, ab: &mut AugmentedMatrix<T>) -> Result<()> {
        let n = ab.dim();
        let threshold = self.pivot_threshold(ab);

        log::debug!(
            "Gaussian elimination: n = {}, strategy = {:?}, workers = {}, pivot threshold = {:.3e}",
            n,
            self.config.strategy,
            worker_count(),
            threshold.to_f64().unwrap_or(0.0)
        );

        for column in 0..n {
            let pivot_row = select_pivot(ab, column, threshold).inspect_err(|err| {
                log::warn!("{}", err);
            })?;

            if pivot_row != column {
                log::trace!("column {}: swapping rows {} and {}", column, column, pivot_row);
                ab.swap_rows(column, pivot_row);
            }

            let fan_out = self
                .config
                .strategy
                .fans_out(n - column - 1, self.config.parallel_min_rows);
            eliminate_column(ab, column, fan_out);

            if self.config.log_interval > 0 && (column + 1) % self.config.log_interval == 0 {
                log::info!("Gaussian elimination: column {}/{} reduced", column + 1, n);
            }
        }

        Ok(())
    }

    /// Solve a system already held in an augmented matrix, consuming its
    /// contents as scratch space
    pub fn solve_augmented<T: ComplexField>(
        &self,
        ab: &mut AugmentedMatrix<T>,
    ) -> Result<Array1<T>> {
        self.forward_eliminate(ab)?;
        back_substitute(ab, self.pivot_threshold(ab)).inspect_err(|err| {
            log::warn!("{}", err);
        })
    }

    /// Solve on a dedicated thread, taking ownership of the inputs.
    ///
    /// Join the handle to get the result.
    pub fn spawn_solve<T: ComplexField>(
        self,
        a: Array2<T>,
        b: Array1<T>,
    ) -> JoinHandle<Result<Array1<T>>> {
        thread::spawn(move || self.solve(&a, &b))
    }

    /// Absolute pivot threshold for `ab`, derived from the relative tolerance
    fn pivot_threshold<T: ComplexField>(&self, ab: &AugmentedMatrix<T>) -> T::Real {
        let tol = T::Real::from_f64(self.config.pivot_tolerance.max(0.0))
            .unwrap_or_else(T::Real::epsilon);
        tol * ab.scale()
    }
}

/// Solve `A x = b` by Gaussian elimination with the default configuration.
///
/// This is a convenience function equivalent to
/// `LinearSolver::default().solve(a, b)`.
pub fn gauss_solve<T: ComplexField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    LinearSolver::default().solve(a, b)
}
