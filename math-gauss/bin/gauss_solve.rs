//! Solve a dense linear system read from a text file
//!
//! Usage:
//!     cargo run --release --bin gauss-solve -- matrix.txt --verify
//!
//! Set `RUST_LOG=debug` to see solver diagnostics.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use math_audio_gauss::{
    ElimStrategy, GaussConfig, LinearSolver, format_solution, load_config, load_system,
    max_abs_residual,
};
use ndarray::{Array1, Array2};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "gauss-solve",
    about = "Solve Ax = b by Gaussian elimination with partial pivoting"
)]
struct Cli {
    /// System file: one matrix row per line, right-hand side on the last line
    #[arg(default_value = "matrix.txt")]
    input: PathBuf,

    /// Solver configuration file (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Relative pivot tolerance (overrides the configuration file)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Row reduction strategy (overrides the configuration file)
    #[arg(long, value_enum)]
    strategy: Option<StrategyChoice>,

    /// Minimum rows below the pivot before the auto strategy fans out
    #[arg(long)]
    parallel_min_rows: Option<usize>,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Print the maximum absolute residual |Ax - b|
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Print the upper-triangular augmented matrix after forward elimination
    #[arg(long, default_value_t = false)]
    show_triangular: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyChoice {
    Auto,
    Sequential,
    Parallel,
}

impl From<StrategyChoice> for ElimStrategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Auto => ElimStrategy::Auto,
            StrategyChoice::Sequential => ElimStrategy::Sequential,
            StrategyChoice::Parallel => ElimStrategy::Parallel,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    configure_threads(cli.threads)?;

    let system = load_system(&cli.input)
        .with_context(|| format!("failed to read system from {}", cli.input.display()))?;
    log::info!("Loaded {}x{} system from {}", system.dim(), system.dim(), cli.input.display());

    let solver = LinearSolver::new(config);

    let n = system.dim();
    let a = Array2::from_shape_fn((n, n), |(i, j)| system.rows[i][j]);
    let b = Array1::from(system.rhs.clone());

    if cli.show_triangular {
        let upper = solver
            .factorize(&a, &b)
            .context("forward elimination failed")?;
        println!("Upper triangular [U | c]:");
        for row in upper.view().rows() {
            println!("{}", format_solution(&row.to_owned()));
        }
    }

    let start = Instant::now();
    let x = solver
        .solve_rows(&system.rows, &system.rhs)
        .context("failed to solve system")?;
    log::info!("Solved in {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);

    println!("Solution: {}", format_solution(&x));

    if cli.verify {
        println!("Max residual: {:.3e}", max_abs_residual(&a, &x, &b));
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<GaussConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => GaussConfig::default(),
    };

    if let Some(tolerance) = cli.tolerance {
        anyhow::ensure!(
            tolerance.is_finite() && tolerance >= 0.0,
            "tolerance must be finite and >= 0, got {tolerance}"
        );
        config.pivot_tolerance = tolerance;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }
    if let Some(min_rows) = cli.parallel_min_rows {
        config.parallel_min_rows = min_rows;
    }

    log::debug!("Solver configuration: {:?}", config);
    Ok(config)
}

#[cfg(feature = "rayon")]
fn configure_threads(threads: Option<usize>) -> Result<()> {
    if let Some(threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the worker pool")?;
    }
    Ok(())
}

#[cfg(not(feature = "rayon"))]
fn configure_threads(threads: Option<usize>) -> Result<()> {
    if threads.is_some() {
        log::warn!("built without the rayon feature, --threads is ignored");
    }
    Ok(())
}
