use profit_types::{Price, PriceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Uniform random prices in the inclusive range `[min_price, max_price]`.
#[derive(Debug, Clone, Copy)]
pub struct PriceGenerator {
    pub count: usize,
    pub min_price: Price,
    pub max_price: Price,
}

impl PriceGenerator {
    pub fn new(count: usize, min_price: Price, max_price: Price) -> Self {
        Self {
            count,
            min_price,
            max_price,
        }
    }

    /// An inverted range is treated as if its bounds were swapped.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Price> {
        let (lo, hi) = if self.min_price <= self.max_price {
            (self.min_price, self.max_price)
        } else {
            (self.max_price, self.min_price)
        };
        (0..self.count).map(|_| rng.gen_range(lo..=hi)).collect()
    }
}

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Write one price per line, `\n`-terminated.
pub fn write_price_file(path: impl AsRef<Path>, prices: &[Price]) -> Result<(), PriceError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PriceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for price in prices {
        writeln!(writer, "{price}").map_err(|e| PriceError::io(path, e))?;
    }
    writer.flush().map_err(|e| PriceError::io(path, e))?;
    Ok(())
}

/// A generated price file that is deleted when this value is dropped.
#[derive(Debug)]
pub struct GeneratedPriceFile {
    path: PathBuf,
    count: usize,
}

impl GeneratedPriceFile {
    /// Generate prices and write them to `path`, replacing any existing file.
    pub fn create<R: Rng + ?Sized>(
        path: impl Into<PathBuf>,
        generator: &PriceGenerator,
        rng: &mut R,
    ) -> Result<Self, PriceError> {
        let path = path.into();
        let prices = generator.generate(rng);
        // Partially written files are removed by the guard below.
        let guard = Self {
            path,
            count: prices.len(),
        };
        write_price_file(&guard.path, &prices)?;
        info!(
            path = %guard.path.display(),
            count = %guard.count,
            min = %generator.min_price,
            max = %generator.max_price,
            "Generated price file"
        );
        Ok(guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Drop for GeneratedPriceFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed price file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove price file"),
        }
    }
}
