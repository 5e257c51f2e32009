mod harness;

use anyhow::{Context, Result};
use profit_types::Config;
use tracing::info;

fn main() -> Result<()> {
    // ── Setup ──
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();

    info!("╔══════════════════════════════════════╗");
    info!("║   Profit Bench v0.1.0 — buy & sell   ║");
    info!("╚══════════════════════════════════════╝");

    let config = Config::from_env()?;
    let strategies: Vec<&str> = config.strategies.iter().map(|s| s.name()).collect();
    info!(
        strategies = %strategies.join(","),
        warmup = %config.warmup_iterations,
        iterations = %config.measurement_iterations,
        "Configuration loaded"
    );

    // ── Solve a given file ──
    if let Some(path) = config.input_file.clone() {
        info!(input = %path.display(), "Solving input file");
        let report = harness::run_solve(&config, &path)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
        return Ok(());
    }

    // ── Benchmark on generated data ──
    info!(
        file = %config.price_file.display(),
        count = %config.price_count,
        min = %config.min_price,
        max = %config.max_price,
        seed = ?config.seed,
        "Benchmarking on generated prices"
    );
    let report = harness::run_benchmark(&config)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    );

    info!("Benchmark complete.");
    Ok(())
}
