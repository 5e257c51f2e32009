use profit_types::{Price, ProfitResult};

/// A day and the price seen on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DayPrice {
    day: usize,
    price: Price,
}

impl DayPrice {
    fn gain_to(&self, price: Price) -> i64 {
        i64::from(price) - i64::from(self.price)
    }
}

#[derive(Debug, Clone, Copy)]
struct Triplet {
    buy: DayPrice,
    sell: DayPrice,
    /// Lowest price since `buy` was last set.
    possible_buy: DayPrice,
}

impl Triplet {
    fn best_profit(&self) -> i64 {
        self.buy.gain_to(self.sell.price)
    }
}

/// Incremental single-pass max-profit scan.
///
/// Keeps three points: the confirmed buy, the confirmed sell, and the
/// cheapest day since the confirmed buy. Each price is looked at once and
/// nothing else is stored, so it can sit directly on top of a file stream.
#[derive(Debug, Clone, Default)]
pub struct SinglePassTracker {
    state: Option<Triplet>,
    next_day: usize,
}

impl SinglePassTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, price: Price) {
        let today = DayPrice {
            day: self.next_day,
            price,
        };
        self.next_day += 1;

        let Some(t) = self.state.as_mut() else {
            self.state = Some(Triplet {
                buy: today,
                sell: today,
                possible_buy: today,
            });
            return;
        };

        if t.buy.gain_to(price) > t.best_profit() {
            t.sell = today;
        }
        if t.possible_buy.gain_to(price) > t.best_profit() {
            t.buy = t.possible_buy;
            t.sell = today;
        }
        if t.possible_buy.price > price {
            t.possible_buy = today;
        }
    }

    /// Days pushed so far.
    pub fn days_seen(&self) -> usize {
        self.next_day
    }

    /// Best transaction so far, `None` while nothing profitable exists.
    pub fn current(&self) -> Option<ProfitResult> {
        let t = self.state?;
        ProfitResult::from_days(t.buy.day, t.buy.price, t.sell.day, t.sell.price)
    }

    pub fn finish(self) -> Option<ProfitResult> {
        self.current()
    }
}

pub fn single_pass(prices: &[Price]) -> Option<ProfitResult> {
    let mut tracker = SinglePassTracker::new();
    for &price in prices {
        tracker.push(price);
    }
    tracker.finish()
}

/// Single-pass scan over a fallible stream such as
/// [`PriceReader`](profit_collector::PriceReader).
///
/// The first error is returned and no partial result escapes.
pub fn try_single_pass<I, E>(prices: I) -> Result<Option<ProfitResult>, E>
where
    I: IntoIterator<Item = Result<Price, E>>,
{
    let mut tracker = SinglePassTracker::new();
    for price in prices {
        tracker.push(price?);
    }
    Ok(tracker.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let r = single_pass(&[7, 1, 5, 3, 6, 4]).unwrap();
        assert_eq!((r.buy, r.sell, r.profit), (1, 4, 5));
    }

    #[test]
    fn test_strictly_decreasing_has_no_trade() {
        assert_eq!(single_pass(&[9, 7, 5, 3, 1]), None);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(single_pass(&[42]), None);
        assert_eq!(single_pass(&[]), None);
    }

    #[test]
    fn test_flat_series_has_no_trade() {
        assert_eq!(single_pass(&[5, 5, 5, 5]), None);
    }

    #[test]
    fn test_later_lower_buy_wins() {
        // 3 -> 8 is worth 5, but 1 -> 9 later is worth 8.
        let r = single_pass(&[3, 8, 2, 1, 9]).unwrap();
        assert_eq!((r.buy, r.sell, r.profit), (3, 4, 8));
    }

    #[test]
    fn test_new_low_without_better_sell_keeps_old_pair() {
        // The dip to 1 comes too late to beat 2 -> 10.
        let r = single_pass(&[2, 10, 1, 5]).unwrap();
        assert_eq!((r.buy, r.sell, r.profit), (0, 1, 8));
    }

    #[test]
    fn test_extreme_values() {
        let r = single_pass(&[u32::MAX, 0, u32::MAX]).unwrap();
        assert_eq!(r.profit, u64::from(u32::MAX));
        assert_eq!((r.buy, r.sell), (1, 2));
    }

    #[test]
    fn test_tracker_current_updates_incrementally() {
        let mut t = SinglePassTracker::new();
        t.push(4);
        assert_eq!(t.current(), None);
        t.push(6);
        assert_eq!(t.current().map(|r| r.profit), Some(2));
        t.push(1);
        t.push(2);
        assert_eq!(t.current().map(|r| r.profit), Some(2));
        t.push(9);
        assert_eq!(t.current().map(|r| (r.buy, r.sell, r.profit)), Some((2, 4, 8)));
        assert_eq!(t.days_seen(), 5);
    }

    #[test]
    fn test_try_single_pass_propagates_first_error() {
        let items: Vec<Result<Price, &str>> = vec![Ok(1), Ok(5), Err("bad"), Ok(100)];
        assert_eq!(try_single_pass(items), Err("bad"));
    }

    #[test]
    fn test_try_single_pass_ok() {
        let items: Vec<Result<Price, ()>> = vec![Ok(7), Ok(1), Ok(5), Ok(3), Ok(6), Ok(4)];
        assert_eq!(try_single_pass(items).unwrap().map(|r| r.profit), Some(5));
    }
}
