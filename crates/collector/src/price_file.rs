use profit_types::{parse_price_line, Price, PriceError, PriceSeries};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Streams prices out of a file one line at a time.
///
/// Yields `Err` for the first unreadable or malformed line and then stops.
/// The file handle is closed when the reader is dropped, on every path.
pub struct PriceReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    done: bool,
}

impl PriceReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PriceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| PriceError::io(&path, e))?;
        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            line_no: 0,
            done: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl Iterator for PriceReader {
    type Item = Result<Price, PriceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = match self.lines.next()? {
            Ok(text) => {
                self.line_no += 1;
                parse_price_line(self.line_no, &text)
            }
            // Non-UTF-8 bytes can't be digits either.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                self.line_no += 1;
                Err(PriceError::InvalidInputFormat {
                    line: self.line_no,
                    content: String::from("<invalid utf-8>"),
                })
            }
            Err(e) => Err(PriceError::io(&self.path, e)),
        };

        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}

/// Read a whole price file into memory.
pub fn read_prices(path: impl AsRef<Path>) -> Result<PriceSeries, PriceError> {
    let reader = PriceReader::open(path)?;
    let path = reader.path().to_path_buf();
    let prices = reader.collect::<Result<Vec<_>, _>>()?;
    debug!(path = %path.display(), count = %prices.len(), "Loaded price file");
    Ok(PriceSeries::new(prices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_read_prices_lf() {
        let f = write_tmp("7\n1\n5\n3\n6\n4\n");
        let series = read_prices(f.path()).unwrap();
        assert_eq!(series.as_slice(), &[7, 1, 5, 3, 6, 4]);
    }

    #[test]
    fn test_read_prices_crlf_and_no_trailing_newline() {
        let f = write_tmp("10\r\n20\r\n30");
        let series = read_prices(f.path()).unwrap();
        assert_eq!(series.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_read_prices_empty_file() {
        let f = write_tmp("");
        assert!(read_prices(f.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_prices_blank_line_rejected() {
        let f = write_tmp("1\n\n2\n");
        let err = read_prices(f.path()).unwrap_err();
        assert!(matches!(err, PriceError::InvalidInputFormat { line: 2, .. }));
    }

    #[test]
    fn test_read_prices_negative_rejected() {
        let f = write_tmp("1\n-5\n");
        let err = read_prices(f.path()).unwrap_err();
        match err {
            PriceError::InvalidInputFormat { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "-5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_prices(dir.path().join("nope.txt")).unwrap_err();
        assert!(err.is_io_unavailable());
    }

    #[test]
    fn test_invalid_utf8_is_invalid_input() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"1\n\xff\xfe\n").unwrap();
        f.flush().unwrap();
        let err = read_prices(f.path()).unwrap_err();
        assert!(matches!(err, PriceError::InvalidInputFormat { line: 2, .. }));
    }

    #[test]
    fn test_reader_stops_after_first_error() {
        let f = write_tmp("1\nx\n2\n");
        let mut reader = PriceReader::open(f.path()).unwrap();
        assert_eq!(reader.next().unwrap().unwrap(), 1);
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
        assert_eq!(reader.lines_read(), 2);
    }
}
