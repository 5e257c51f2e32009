use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a price file into a [`PriceSeries`](crate::PriceSeries).
#[derive(Debug, Error)]
pub enum PriceError {
    /// A line was not made solely of ASCII decimal digits, or overflowed `u32`.
    #[error("invalid price on line {line}: {content:?}")]
    InvalidInputFormat { line: usize, content: String },

    /// The file could not be opened, read, or written.
    #[error("price file {path} unavailable: {source}")]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PriceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInputFormat { .. })
    }

    pub fn is_io_unavailable(&self) -> bool {
        matches!(self, Self::IoUnavailable { .. })
    }
}
