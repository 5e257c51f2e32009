use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which max-profit algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    /// Running buy/sell/candidate triplet. O(n) time, O(1) space.
    SinglePass,
    /// Maximum subarray over day-to-day differences. O(n) time, O(n) space.
    Kadane,
    /// Every (buy, sell) pair. O(n²) time, reference result.
    BruteForce,
}

impl StrategyType {
    pub const ALL: [StrategyType; 3] = [Self::SinglePass, Self::Kadane, Self::BruteForce];

    /// Stable name used in config and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SinglePass => "single_pass",
            Self::Kadane => "kadane",
            Self::BruteForce => "brute_force",
        }
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            Self::SinglePass => "O(n) time, O(1) space",
            Self::Kadane => "O(n) time, O(n) space",
            Self::BruteForce => "O(n^2) time, O(n) space",
        }
    }

    /// Whether the strategy can run over a stream without holding the series.
    pub fn is_streaming(&self) -> bool {
        matches!(self, Self::SinglePass)
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyType {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|st| st.name() == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// The chosen transaction: buy on day `buy`, sell on day `sell`.
///
/// Days are 0-based and `buy < sell`. Only profitable transactions are
/// represented; "nothing worth doing" is `None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitResult {
    pub buy: usize,
    pub sell: usize,
    pub profit: u64,
}

impl ProfitResult {
    /// Build from two days and their prices. Returns `None` unless
    /// `buy < sell` and the sell price is strictly higher.
    pub fn from_days(buy: usize, buy_price: Price, sell: usize, sell_price: Price) -> Option<Self> {
        if buy < sell && sell_price > buy_price {
            Some(Self {
                buy,
                sell,
                profit: u64::from(sell_price - buy_price),
            })
        } else {
            None
        }
    }

    /// Same transaction as 1-based trading days.
    pub fn as_trading_days(&self) -> (usize, usize) {
        (self.buy + 1, self.sell + 1)
    }
}

/// Profit value of an outcome; "no transaction" is worth 0.
pub fn profit_of(outcome: &Option<ProfitResult>) -> u64 {
    outcome.map_or(0, |r| r.profit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_roundtrip() {
        for st in StrategyType::ALL {
            assert_eq!(st.name().parse::<StrategyType>().unwrap(), st);
        }
    }

    #[test]
    fn test_strategy_parse_lenient() {
        assert_eq!(" Brute-Force ".parse::<StrategyType>().unwrap(), StrategyType::BruteForce);
        assert_eq!("KADANE".parse::<StrategyType>().unwrap(), StrategyType::Kadane);
        assert!("quantum".parse::<StrategyType>().is_err());
    }

    #[test]
    fn test_only_single_pass_streams() {
        assert!(StrategyType::SinglePass.is_streaming());
        assert!(!StrategyType::Kadane.is_streaming());
        assert!(!StrategyType::BruteForce.is_streaming());
    }

    #[test]
    fn test_strategy_serializes_snake_case() {
        let json = serde_json::to_string(&StrategyType::SinglePass).unwrap();
        assert_eq!(json, "\"single_pass\"");
    }

    #[test]
    fn test_from_days_profitable() {
        let r = ProfitResult::from_days(1, 1, 4, 6).unwrap();
        assert_eq!(r.profit, 5);
        assert_eq!(r.as_trading_days(), (2, 5));
    }

    #[test]
    fn test_from_days_rejects_loss_and_order() {
        assert!(ProfitResult::from_days(0, 9, 1, 7).is_none());
        assert!(ProfitResult::from_days(2, 3, 2, 3).is_none());
        assert!(ProfitResult::from_days(3, 1, 2, 5).is_none());
    }

    #[test]
    fn test_profit_of_none_is_zero() {
        assert_eq!(profit_of(&None), 0);
        let r = ProfitResult { buy: 0, sell: 1, profit: 3 };
        assert_eq!(profit_of(&Some(r)), 3);
    }
}
