//! Dense linear solver by Gaussian elimination
//!
//! This crate solves `A x = b` for a dense square `A` using Gaussian
//! elimination with partial pivoting. Rows below each pivot are reduced
//! concurrently, with a fork-join barrier between pivot columns.
//!
//! # Features
//!
//! - **Partial pivoting** with a relative singularity tolerance
//! - **Parallel row reduction** via rayon (`rayon` feature, on by default)
//! - **Generic Scalar Types**: Works with f64, f32, Complex64, Complex32
//! - **Plain-text I/O**: system files and fixed-precision output
//!
//! # Example
//!
//! ```
//! use math_audio_gauss::gauss_solve;
//! use ndarray::array;
//!
//! let a = array![[1.0_f64, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]];
//! let b = array![14.0_f64, 10.0, 32.0];
//!
//! let x = gauss_solve(&a, &b)?;
//! assert!((x[0] - 4.0).abs() < 1e-10);
//! # Ok::<(), math_audio_gauss::SolverError>(())
//! ```

pub mod augmented;
pub mod config;
pub mod direct;
pub mod error;
pub mod io;
pub mod parallel;
pub mod traits;
pub mod vector_ops;

// Re-export main types
pub use augmented::AugmentedMatrix;
pub use error::{Phase, Result, SolverError};
pub use traits::ComplexField;

// Re-export the solver
pub use direct::{
    ElimStrategy, GaussConfig, LinearSolver, back_substitute, eliminate_column, gauss_solve,
    select_pivot,
};

// Re-export I/O helpers
pub use config::{ConfigError, ConfigFormat, load_config, parse_config, validate_config};
pub use io::{LoadError, LoadedSystem, format_solution, load_system, parse_system};
pub use vector_ops::max_abs_residual;
