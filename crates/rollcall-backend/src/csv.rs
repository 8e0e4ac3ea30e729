//! CSV table source.
//!
//! The whole file is treated as one table, no header handling, ragged rows
//! allowed. The delimiter is sniffed from the first line among the common
//! candidates (`,`, `;`, tab, `|`), defaulting to a comma.

use log::debug;
use rollcall_core::{DocumentSource, Result, RollcallError, TableData};

/// Table source for `.csv` files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CsvSource;

impl CsvSource {
    /// Create a new CSV source.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Pick the candidate delimiter occurring most often in the first line.
    fn detect_delimiter(content: &str) -> u8 {
        let first_line = content.lines().next().unwrap_or_default();
        let candidates = [b',', b';', b'\t', b'|'];

        let mut best = b',';
        let mut max_count = 0;
        for &delim in &candidates {
            let count = first_line.bytes().filter(|&b| b == delim).count();
            if count > max_count {
                max_count = count;
                best = delim;
            }
        }
        best
    }
}

impl DocumentSource for CsvSource {
    fn read_tables(&self, data: &[u8]) -> Result<Vec<TableData>> {
        let content = std::str::from_utf8(data)
            .map_err(|e| RollcallError::InvalidFormat(format!("CSV is not valid UTF-8: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let delimiter = Self::detect_delimiter(content);
        debug!("csv: using delimiter {:?}", char::from(delimiter));

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| RollcallError::InvalidFormat(format!("malformed CSV record: {e}")))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(vec![TableData::new(rows)])
    }
}
