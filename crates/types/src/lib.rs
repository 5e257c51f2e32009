pub mod config;
pub mod error;
pub mod price;
pub mod profit;

pub use config::Config;
pub use error::PriceError;
pub use price::{parse_price_line, Price, PriceSeries};
pub use profit::{profit_of, ProfitResult, StrategyType, UnknownStrategy};
