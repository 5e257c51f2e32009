use profit_types::{Price, ProfitResult};

/// Compare every buy day with every later sell day.
///
/// Quadratic, so only practical for modest series. Used as the reference
/// when checking the linear strategies. The first maximal pair wins ties.
pub fn brute_force(prices: &[Price]) -> Option<ProfitResult> {
    let mut best: Option<ProfitResult> = None;

    for (buy, &buy_price) in prices.iter().enumerate() {
        for (offset, &sell_price) in prices[buy + 1..].iter().enumerate() {
            let sell = buy + 1 + offset;
            let Some(candidate) = ProfitResult::from_days(buy, buy_price, sell, sell_price) else {
                continue;
            };
            if best.map_or(true, |b| candidate.profit > b.profit) {
                best = Some(candidate);
            }
        }
    }

    best
}
