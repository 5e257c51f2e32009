use profit_types::{Price, ProfitResult};

/// Day-over-day price changes. `out[k] = prices[k + 1] - prices[k]`.
pub fn price_differences(prices: &[Price]) -> Vec<i64> {
    prices
        .windows(2)
        .map(|w| i64::from(w[1]) - i64::from(w[0]))
        .collect()
}

/// Kadane's maximum subarray with positions.
///
/// Returns `(start, end, sum)` for the inclusive range `values[start..=end]`
/// with the largest strictly positive sum, or `None` if no range sums above
/// zero. Ties keep the earliest range found.
pub fn max_subarray(values: &[i64]) -> Option<(usize, usize, i64)> {
    let mut best: Option<(usize, usize, i64)> = None;
    let mut sum = 0i64;
    let mut start = 0usize;

    for (end, &value) in values.iter().enumerate() {
        sum += value;
        if sum > best.map_or(0, |(_, _, s)| s) {
            best = Some((start, end, sum));
        }
        if sum < 0 {
            sum = 0;
            start = end + 1;
        }
    }

    best
}

/// Max-profit via the maximum-sum run of daily differences.
///
/// Differences `[l..=r]` add up to `prices[r + 1] - prices[l]`, so the
/// winning run maps to buying on day `l` and selling on day `r + 1`.
pub fn kadane(prices: &[Price]) -> Option<ProfitResult> {
    if prices.len() < 2 {
        return None;
    }

    let diffs = price_differences(prices);
    let (l, r, sum) = max_subarray(&diffs)?;
    let result = ProfitResult::from_days(l, prices[l], r + 1, prices[r + 1]);
    debug_assert_eq!(result.map(|t| t.profit as i64), Some(sum));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let r = kadane(&[7, 1, 5, 3, 6, 4]).unwrap();
        assert_eq!((r.buy, r.sell, r.profit), (1, 4, 5));
    }

    #[test]
    fn test_strictly_decreasing_has_no_trade() {
        assert_eq!(kadane(&[9, 7, 5, 3, 1]), None);
    }

    #[test]
    fn test_short_series_do_not_index_out_of_range() {
        assert_eq!(kadane(&[]), None);
        assert_eq!(kadane(&[3]), None);
        assert_eq!(kadane(&[3, 4]).map(|r| (r.buy, r.sell, r.profit)), Some((0, 1, 1)));
    }

    #[test]
    fn test_differences() {
        assert_eq!(price_differences(&[7, 1, 5]), vec![-6, 4]);
        assert!(price_differences(&[1]).is_empty());
        assert_eq!(price_differences(&[0, u32::MAX]), vec![i64::from(u32::MAX)]);
    }

    #[test]
    fn test_max_subarray_mixed() {
        assert_eq!(max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some((3, 6, 6)));
    }

    #[test]
    fn test_max_subarray_all_negative_or_zero() {
        assert_eq!(max_subarray(&[-8, -3, -6]), None);
        assert_eq!(max_subarray(&[0, 0, 0]), None);
        assert_eq!(max_subarray(&[]), None);
    }

    #[test]
    fn test_max_subarray_dip_inside_run() {
        // 10 - 5 + 2 - 1 + 15 = 21 beats any shorter run.
        assert_eq!(max_subarray(&[10, -5, 2, -1, 15, -20, 3]), Some((0, 4, 21)));
    }

    #[test]
    fn test_run_after_reset() {
        let r = kadane(&[5, 9, 1, 2, 20]).unwrap();
        assert_eq!((r.buy, r.sell, r.profit), (2, 4, 19));
    }
}
