use crate::profit::StrategyType;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Harness configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // ── Solve mode ──
    /// When set, solve this file once instead of benchmarking.
    pub input_file: Option<PathBuf>,

    // ── Generated data ──
    pub price_file: PathBuf,
    pub price_count: usize,
    pub min_price: u32,
    pub max_price: u32,
    /// Fixed RNG seed for reproducible runs; entropy when `None`.
    pub seed: Option<u64>,

    // ── Measurement ──
    pub warmup_iterations: u32,
    pub measurement_iterations: u32,
    pub strategies: Vec<StrategyType>,
}

impl Config {
    /// Load configuration from environment variables.
    /// Call `dotenvy::dotenv().ok()` before calling this.
    pub fn from_env() -> Result<Self> {
        let config = Config {
            input_file: env_var_opt("INPUT_FILE").map(PathBuf::from),
            price_file: PathBuf::from(env_var_or("PRICE_FILE", "prices.txt")),
            price_count: env_var_or("PRICE_COUNT", "100000")
                .parse()
                .context("Invalid PRICE_COUNT")?,
            min_price: env_var_or("MIN_PRICE", "42")
                .parse()
                .context("Invalid MIN_PRICE")?,
            max_price: env_var_or("MAX_PRICE", "9999")
                .parse()
                .context("Invalid MAX_PRICE")?,
            seed: env_var_opt("PRICE_SEED")
                .map(|s| s.parse())
                .transpose()
                .context("Invalid PRICE_SEED")?,
            warmup_iterations: env_var_or("WARMUP_ITERATIONS", "1")
                .parse()
                .context("Invalid WARMUP_ITERATIONS")?,
            measurement_iterations: env_var_or("MEASUREMENT_ITERATIONS", "10")
                .parse()
                .context("Invalid MEASUREMENT_ITERATIONS")?,
            strategies: parse_strategies(&env_var_or(
                "STRATEGIES",
                "single_pass,kadane,brute_force",
            )),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_price > self.max_price {
            bail!(
                "MIN_PRICE ({}) must not exceed MAX_PRICE ({})",
                self.min_price,
                self.max_price
            );
        }
        if self.measurement_iterations == 0 {
            bail!("MEASUREMENT_ITERATIONS must be at least 1");
        }
        if self.strategies.is_empty() {
            bail!("STRATEGIES names no known strategy");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: None,
            price_file: PathBuf::from("prices.txt"),
            price_count: 100_000,
            min_price: 42,
            max_price: 9999,
            seed: None,
            warmup_iterations: 1,
            measurement_iterations: 10,
            strategies: StrategyType::ALL.to_vec(),
        }
    }
}

/// Comma-separated strategy names. Unknown and duplicate entries are skipped.
fn parse_strategies(list: &str) -> Vec<StrategyType> {
    let mut out = Vec::new();
    for entry in list.split(',').filter(|s| !s.trim().is_empty()) {
        match entry.parse::<StrategyType>() {
            Ok(st) if !out.contains(&st) => out.push(st),
            Ok(_) => {}
            Err(e) => eprintln!("WARN: Skipping {e}"),
        }
    }
    out
}

fn env_var_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
