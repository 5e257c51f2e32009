pub mod generator;
pub mod price_file;

pub use generator::{rng_from_seed, write_price_file, GeneratedPriceFile, PriceGenerator};
pub use price_file::{read_prices, PriceReader};
