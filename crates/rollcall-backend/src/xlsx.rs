//! XLSX (Microsoft Excel) table source using calamine.
//!
//! Each worksheet is one table, in workbook order. Cell values are rendered
//! to strings; empty cells become empty strings so downstream trimming drops
//! them.

use calamine::{Data, Reader, Xlsx};
use log::debug;
use rollcall_core::{DocumentSource, Result, RollcallError, TableData};
use std::io::Cursor;

/// Table source for `.xlsx` workbooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct XlsxSource;

impl XlsxSource {
    /// Create a new XLSX source.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_cell(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl DocumentSource for XlsxSource {
    fn read_tables(&self, data: &[u8]) -> Result<Vec<TableData>> {
        let mut workbook = Xlsx::new(Cursor::new(data))
            .map_err(|e| RollcallError::InvalidFormat(format!("not an XLSX workbook: {e}")))?;

        let mut tables = Vec::new();
        for (name, range) in workbook.worksheets() {
            let rows: Vec<Vec<String>> = range
                .rows()
                .map(|row| row.iter().map(Self::render_cell).collect())
                .collect();
            debug!("xlsx: sheet {name:?} has {} rows", rows.len());
            tables.push(TableData::new(rows));
        }

        Ok(tables)
    }
}
