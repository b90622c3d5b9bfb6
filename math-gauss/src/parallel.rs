//! Parallel utilities with feature-gated implementations
//!
//! Row-wise fan-out used by forward elimination and residual evaluation.
//! With the `rayon` feature the work is spread over the rayon pool; without
//! it every helper falls back to a sequential loop with the same results.

use ndarray::{ArrayViewMut1, ArrayViewMut2, Axis};

/// Check if parallel processing is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Number of worker threads rows are fanned out to
#[cfg(feature = "rayon")]
pub fn worker_count() -> usize {
    rayon::current_num_threads()
}

/// Number of worker threads rows are fanned out to
#[cfg(not(feature = "rayon"))]
pub fn worker_count() -> usize {
    1
}

/// Apply `f` to every row of `rows` concurrently.
///
/// Each row is handed to exactly one task, so rows are written disjointly.
/// Returns once every row has been processed.
#[cfg(feature = "rayon")]
pub fn parallel_for_each_row<T, F>(mut rows: ArrayViewMut2<'_, T>, f: F)
where
    T: Send + Sync,
    F: Fn(ArrayViewMut1<'_, T>) + Sync + Send,
{
    use ndarray::parallel::prelude::*;
    rows.axis_iter_mut(Axis(0)).into_par_iter().for_each(f);
}

/// Sequential row loop (fallback when parallel is not available)
#[cfg(not(feature = "rayon"))]
pub fn parallel_for_each_row<T, F>(rows: ArrayViewMut2<'_, T>, f: F)
where
    F: Fn(ArrayViewMut1<'_, T>),
{
    sequential_for_each_row(rows, f);
}

/// Apply `f` to every row of `rows` in order on the calling thread.
pub fn sequential_for_each_row<T, F>(mut rows: ArrayViewMut2<'_, T>, f: F)
where
    F: Fn(ArrayViewMut1<'_, T>),
{
    rows.axis_iter_mut(Axis(0)).for_each(f);
}

/// Parallel map with index
#[cfg(feature = "rayon")]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    U: Send,
    F: Fn(usize) -> U + Sync + Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

/// Sequential map with index (fallback)
#[cfg(not(feature = "rayon"))]
pub fn parallel_map_indexed<U, F>(count: usize, f: F) -> Vec<U>
where
    F: Fn(usize) -> U,
{
    (0..count).map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_parallel_map_indexed() {
        let result = parallel_map_indexed(5, |i| i * 2);
        assert_eq!(result, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_parallel_for_each_row_touches_every_row_once() {
        let mut m = Array2::<f64>::zeros((64, 3));
        parallel_for_each_row(m.view_mut(), |mut row| {
            for v in row.iter_mut() {
                *v += 1.0;
            }
        });
        assert!(m.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let base = array![[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let mut seq = base.clone();
        let mut par = base.clone();

        sequential_for_each_row(seq.view_mut(), |mut row| row *= 3.0);
        parallel_for_each_row(par.view_mut(), |mut row| row *= 3.0);

        assert_eq!(seq, par);
    }

    #[test]
    fn test_worker_count_positive() {
        assert!(worker_count() >= 1);
        if !is_parallel_available() {
            assert_eq!(worker_count(), 1);
        }
    }
}
