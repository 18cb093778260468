use anyhow::{bail, Result};
use clap::Parser;
use dist_matrix::{allclose, max_abs_diff, ComputeConfig, DistanceMatrixComputer, Strategy, DEFAULT_ATOL, DEFAULT_RTOL};
use ndarray::Array2;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use utils::random_matrix;

/// Times every distance matrix strategy on random data and checks they agree
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Rows of the first feature matrix
    #[arg(long, default_value_t = 1_000)]
    rows_x: usize,

    /// Rows of the second feature matrix
    #[arg(long, default_value_t = 1_000)]
    rows_y: usize,

    /// Features per row
    #[arg(short, long, default_value_t = 3)]
    dims: usize,

    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Runs per strategy, the best one is reported
    #[arg(short, long, default_value_t = 3)]
    repeats: usize,

    /// TOML config used for the "configured" run
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let configured = match &args.config {
        Some(path) => ComputeConfig::from_file(path)?,
        None => ComputeConfig::default(),
    };

    tracing::info!(
        "Generating ({}, {}) and ({}, {}) in [0, 10) with seed {}",
        args.rows_x,
        args.dims,
        args.rows_y,
        args.dims,
        args.seed
    );
    let x = random_matrix(args.rows_x, args.dims, 0.0, 10.0, args.seed);
    let y = random_matrix(args.rows_y, args.dims, 0.0, 10.0, args.seed.wrapping_add(1));

    let reference_computer = DistanceMatrixComputer::new(
        ComputeConfig::default().with_strategy(Strategy::Direct).with_parallel(false),
    );
    let (reference_time, reference) = best_of(args.repeats, || reference_computer.compute(&x, &y))?;
    report("direct", false, reference_time, 0.0);

    for parallel in [false, true] {
        for strategy in Strategy::CONCRETE {
            if strategy == Strategy::Direct && !parallel {
                continue;
            }
            let computer = DistanceMatrixComputer::new(
                ComputeConfig::default()
                    .with_strategy(strategy)
                    .with_parallel(parallel)
                    .with_min_parallel_rows(0),
            );
            let (time, dists) = best_of(args.repeats, || computer.compute(&x, &y))?;
            check(strategy.name(), parallel, &dists, &reference, time)?;
        }
    }

    let resolved = configured.resolve(args.rows_x, args.rows_y, args.dims);
    let computer = DistanceMatrixComputer::new(configured);
    let (time, dists) = best_of(args.repeats, || computer.compute(&x, &y))?;
    let label = format!("configured ({} -> {})", computer.config().strategy, resolved);
    check(&label, computer.config().use_parallel(args.rows_x), &dists, &reference, time)?;

    tracing::info!("All strategies agree with direct");
    Ok(())
}

fn best_of<F>(repeats: usize, mut run: F) -> Result<(Duration, Array2<f64>)>
where
    F: FnMut() -> dist_matrix::Result<Array2<f64>>,
{
    let mut best = Duration::MAX;
    let mut result = None;
    for _ in 0..repeats.max(1) {
        let start = Instant::now();
        let dists = run()?;
        best = best.min(start.elapsed());
        result = Some(dists);
    }
    match result {
        Some(dists) => Ok((best, dists)),
        None => bail!("no runs were made"),
    }
}

fn check(label: &str, parallel: bool, dists: &Array2<f64>, reference: &Array2<f64>, time: Duration) -> Result<()> {
    let diff = max_abs_diff(dists, reference).unwrap_or(f64::NAN);
    report(label, parallel, time, diff);
    if !allclose(dists, reference, DEFAULT_RTOL, DEFAULT_ATOL) {
        bail!("{label} (parallel = {parallel}) disagrees with direct, max |diff| = {diff:e}");
    }
    Ok(())
}

fn report(label: &str, parallel: bool, time: Duration, diff: f64) {
    tracing::info!(
        "{label:<32} parallel = {parallel:<5} best {:>10.3} ms  max |diff| {diff:.3e}",
        time.as_secs_f64() * 1000.0
    );
}
