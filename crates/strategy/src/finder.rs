use crate::{brute_force, kadane, single_pass, try_single_pass};
use profit_collector::{read_prices, PriceReader};
use profit_types::{profit_of, Price, PriceError, ProfitResult, StrategyType};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Two strategies reported different profit values for the same prices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{strategy} found profit {actual}, {reference} found {expected}")]
pub struct Disagreement {
    pub reference: StrategyType,
    pub expected: u64,
    pub strategy: StrategyType,
    pub actual: u64,
}

/// Run one strategy over an in-memory series.
pub fn find_max_profit(strategy: StrategyType, prices: &[Price]) -> Option<ProfitResult> {
    match strategy {
        StrategyType::SinglePass => single_pass(prices),
        StrategyType::Kadane => kadane(prices),
        StrategyType::BruteForce => brute_force(prices),
    }
}

/// Read a price file and run one strategy over it.
///
/// The single-pass strategy streams the file; the others load it first.
/// The file is closed before this returns, on success or error.
pub fn solve_file(
    strategy: StrategyType,
    path: impl AsRef<Path>,
) -> Result<Option<ProfitResult>, PriceError> {
    let path = path.as_ref();
    let outcome = if strategy.is_streaming() {
        try_single_pass(PriceReader::open(path)?)?
    } else {
        let series = read_prices(path)?;
        find_max_profit(strategy, series.as_slice())
    };

    debug!(
        strategy = %strategy,
        path = %path.display(),
        profit = %profit_of(&outcome),
        "Solved price file"
    );
    Ok(outcome)
}

/// Check that every outcome has the same profit value.
///
/// Brute force is the reference when present, otherwise the first entry.
/// Returns the agreed profit (0 when there is nothing to compare).
pub fn check_outcomes(
    outcomes: &[(StrategyType, Option<ProfitResult>)],
) -> Result<u64, Disagreement> {
    let Some(&(reference, expected)) = outcomes
        .iter()
        .find(|(st, _)| *st == StrategyType::BruteForce)
        .or_else(|| outcomes.first())
    else {
        return Ok(0);
    };
    let expected = profit_of(&expected);

    for &(strategy, outcome) in outcomes {
        let actual = profit_of(&outcome);
        if actual != expected {
            return Err(Disagreement {
                reference,
                expected,
                strategy,
                actual,
            });
        }
    }
    Ok(expected)
}

/// Run all three strategies over `prices` and compare their profits.
pub fn check_agreement(prices: &[Price]) -> Result<u64, Disagreement> {
    let outcomes: Vec<_> = StrategyType::ALL
        .into_iter()
        .map(|st| (st, find_max_profit(st, prices)))
        .collect();
    check_outcomes(&outcomes)
}
