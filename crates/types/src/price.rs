use crate::error::PriceError;
use serde::{Deserialize, Serialize};

/// A single day's price. Lines that parse cleanly always fit.
pub type Price = u32;

/// Parse one line of a price file.
///
/// The line must be one or more ASCII digits and nothing else: no sign, no
/// whitespace, no empty line. `line` is 1-based and only used for the error.
pub fn parse_price_line(line: usize, text: &str) -> Result<Price, PriceError> {
    let invalid = || PriceError::InvalidInputFormat {
        line,
        content: text.to_string(),
    };

    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Digits only, so the only possible failure left is overflow.
    text.parse::<Price>().map_err(|_| invalid())
}

/// Ordered daily prices, index 0 is the first trading day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    prices: Vec<Price>,
}

impl PriceSeries {
    pub fn new(prices: Vec<Price>) -> Self {
        Self { prices }
    }

    /// Parse a whole series from lines, stopping at the first malformed one.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, PriceError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let prices = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| parse_price_line(i + 1, text))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { prices })
    }

    pub fn as_slice(&self) -> &[Price] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn get(&self, day: usize) -> Option<Price> {
        self.prices.get(day).copied()
    }

    pub fn into_inner(self) -> Vec<Price> {
        self.prices
    }
}

impl From<Vec<Price>> for PriceSeries {
    fn from(prices: Vec<Price>) -> Self {
        Self::new(prices)
    }
}

impl AsRef<[Price]> for PriceSeries {
    fn as_ref(&self) -> &[Price] {
        &self.prices
    }
}
