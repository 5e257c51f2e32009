use anyhow::{Context, Result};
use profit_collector::{rng_from_seed, GeneratedPriceFile, PriceGenerator};
use profit_strategy::{check_outcomes, solve_file};
use profit_types::{profit_of, Config, ProfitResult, StrategyType};
use serde::Serialize;
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Timing summary for one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: StrategyType,
    pub complexity: &'static str,
    pub iterations_ok: u32,
    pub iterations_failed: u32,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    /// Completed iterations per second of measured time.
    pub ops_per_sec: f64,
    /// Outcome of the last successful iteration, kept for the cross-check.
    pub outcome: Option<ProfitResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub price_count: usize,
    pub min_price: u32,
    pub max_price: u32,
    pub seed: Option<u64>,
    pub strategies: Vec<StrategyReport>,
    /// Profit every strategy agreed on, `None` if they disagreed.
    pub agreed_profit: Option<u64>,
    pub disagreement: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveEntry {
    pub strategy: StrategyType,
    pub outcome: Option<ProfitResult>,
    pub profit: u64,
    /// 1-based `(buy, sell)` days, as read in the file.
    pub trading_days: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub input_file: PathBuf,
    pub results: Vec<SolveEntry>,
    pub agreed_profit: u64,
}

/// Solve `path` once with every configured strategy.
pub fn run_solve(config: &Config, path: &Path) -> Result<SolveReport> {
    let mut results = Vec::with_capacity(config.strategies.len());

    for &strategy in &config.strategies {
        let outcome = solve_file(strategy, path)
            .with_context(|| format!("{strategy} failed on {}", path.display()))?;

        match outcome {
            Some(r) => info!(
                strategy = %strategy,
                buy = %r.buy,
                sell = %r.sell,
                profit = %r.profit,
                "Best transaction"
            ),
            None => info!(strategy = %strategy, "No profitable transaction"),
        }

        results.push(SolveEntry {
            strategy,
            outcome,
            profit: profit_of(&outcome),
            trading_days: outcome.map(|r| r.as_trading_days()),
        });
    }

    let outcomes: Vec<_> = results.iter().map(|e| (e.strategy, e.outcome)).collect();
    let agreed_profit = check_outcomes(&outcomes).context("Strategies disagree")?;

    Ok(SolveReport {
        input_file: path.to_path_buf(),
        results,
        agreed_profit,
    })
}

/// Generate a price file, time every configured strategy on it, then remove it.
pub fn run_benchmark(config: &Config) -> Result<BenchReport> {
    let generator = PriceGenerator::new(config.price_count, config.min_price, config.max_price);
    let mut rng = rng_from_seed(config.seed);
    let file = GeneratedPriceFile::create(&config.price_file, &generator, &mut rng)
        .context("Failed to generate price file")?;

    let strategies: Vec<StrategyReport> = config
        .strategies
        .iter()
        .map(|&st| {
            measure(
                st,
                file.path(),
                config.warmup_iterations,
                config.measurement_iterations,
            )
        })
        .collect();

    let outcomes: Vec<_> = strategies
        .iter()
        .filter(|r| r.iterations_ok > 0)
        .map(|r| (r.strategy, r.outcome))
        .collect();

    let (agreed_profit, disagreement) = match check_outcomes(&outcomes) {
        Ok(profit) => {
            info!(profit = %profit, strategies = %outcomes.len(), "Strategies agree");
            (Some(profit), None)
        }
        Err(e) => {
            warn!(error = %e, "Strategies disagree");
            (None, Some(e.to_string()))
        }
    };

    Ok(BenchReport {
        price_count: file.count(),
        min_price: config.min_price,
        max_price: config.max_price,
        seed: config.seed,
        strategies,
        agreed_profit,
        disagreement,
    })
}

/// Warm up, then time `iterations` independent runs of one strategy.
///
/// A failed iteration is logged and counted; it does not stop the others.
fn measure(strategy: StrategyType, path: &Path, warmup: u32, iterations: u32) -> StrategyReport {
    info!(
        strategy = %strategy,
        complexity = %strategy.complexity(),
        warmup = %warmup,
        iterations = %iterations,
        "Benchmarking"
    );

    for _ in 0..warmup {
        if let Err(e) = solve_file(strategy, path) {
            error!(strategy = %strategy, error = %e, "Warmup iteration failed");
        }
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations as usize);
    let mut failed = 0u32;
    let mut outcome = None;

    for i in 0..iterations {
        let started = Instant::now();
        let result = black_box(solve_file(black_box(strategy), black_box(path)));
        let elapsed = started.elapsed();

        match result {
            Ok(r) => {
                debug!(strategy = %strategy, iteration = %i, elapsed_us = %elapsed.as_micros(), "Iteration done");
                timings.push(elapsed);
                outcome = r;
            }
            Err(e) => {
                failed += 1;
                error!(strategy = %strategy, iteration = %i, error = %e, "Iteration failed");
            }
        }
    }

    let report = summarize(strategy, &timings, failed, outcome);
    info!(
        strategy = %strategy,
        ok = %report.iterations_ok,
        failed = %report.iterations_failed,
        mean_ms = %format!("{:.3}", report.mean_ms),
        ops_per_sec = %format!("{:.2}", report.ops_per_sec),
        "Benchmark finished"
    );
    report
}

fn summarize(
    strategy: StrategyType,
    timings: &[Duration],
    failed: u32,
    outcome: Option<ProfitResult>,
) -> StrategyReport {
    let to_ms = |d: &Duration| d.as_secs_f64() * 1_000.0;
    let total: Duration = timings.iter().sum();
    let ok = timings.len() as u32;

    let (mean_ms, ops_per_sec) = if ok == 0 {
        (0.0, 0.0)
    } else {
        let secs = total.as_secs_f64();
        let ops = if secs > 0.0 { f64::from(ok) / secs } else { 0.0 };
        (to_ms(&total) / f64::from(ok), ops)
    };

    StrategyReport {
        strategy,
        complexity: strategy.complexity(),
        iterations_ok: ok,
        iterations_failed: failed,
        mean_ms,
        min_ms: timings.iter().min().map(to_ms).unwrap_or(0.0),
        max_ms: timings.iter().max().map(to_ms).unwrap_or(0.0),
        ops_per_sec,
        outcome,
    }
}
