//! Column extraction over parsed tables.
//!
//! Walks every table in document order, rows in row order, and collects the
//! trimmed cell at a fixed column index. Read-only; short rows are skipped.

use crate::error::{Result, RollcallError};
use crate::types::TableData;

/// Extract the ordered cell strings at `column_index` across all rows of all
/// tables.
///
/// Cells are trimmed of leading/trailing whitespace; cells that are empty
/// after trimming are dropped. Rows shorter than the index contribute nothing.
///
/// # Errors
///
/// Returns [`RollcallError::InvalidFormat`] when at least one table exists and
/// no row in any table is wide enough for `column_index`. A document with zero
/// tables yields an empty vector instead, so an empty document is never an
/// error.
pub fn read_column(tables: &[TableData], column_index: usize) -> Result<Vec<String>> {
    if tables.is_empty() {
        return Ok(Vec::new());
    }

    let max_width = tables.iter().map(TableData::width).max().unwrap_or(0);
    if column_index >= max_width {
        return Err(RollcallError::InvalidFormat(format!(
            "column {column_index} out of range: widest row has {max_width} cells"
        )));
    }

    let mut cells = Vec::new();
    for table in tables {
        for row in &table.rows {
            if let Some(cell) = row.get(column_index) {
                let trimmed = cell.trim();
                if !trimmed.is_empty() {
                    cells.push(trimmed.to_string());
                }
            }
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> TableData {
        TableData::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_reads_column_across_tables_in_order() {
        let tables = vec![
            table(&[&["1", "Alice"], &["2", "Bob"]]),
            table(&[&["3", "Carol"]]),
        ];
        let names = read_column(&tables, 1).unwrap();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_cells_are_trimmed_and_empties_dropped() {
        let tables = vec![table(&[&["  Alice  "], &["   "], &[""], &["Bob"]])];
        let names = read_column(&tables, 0).unwrap();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let tables = vec![table(&[&["id", "Alice"], &["only-one-cell"], &["id", "Bob"]])];
        let names = read_column(&tables, 1).unwrap();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_column_equal_to_row_width_is_out_of_range() {
        let tables = vec![table(&[&["a", "b"], &["c", "d"]])];
        let err = read_column(&tables, 2).unwrap_err();
        match err {
            RollcallError::InvalidFormat(msg) => {
                assert!(msg.contains("column 2 out of range"), "{msg}");
            }
            _ => panic!("expected InvalidFormat"),
        }
    }

    #[test]
    fn test_column_valid_if_any_row_is_wide_enough() {
        // Ragged tables: only the second row reaches column 2.
        let tables = vec![table(&[&["a"], &["b", "c", "Dana"]])];
        let names = read_column(&tables, 2).unwrap();
        assert_eq!(names, vec!["Dana"]);
    }

    #[test]
    fn test_zero_tables_is_empty_not_error() {
        assert_eq!(read_column(&[], 7).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_whitespace_only_names_survive_if_nonempty_after_trim() {
        let tables = vec![table(&[&["X"], &["Y"]])];
        let names = read_column(&tables, 0).unwrap();
        assert_eq!(names, vec!["X", "Y"]);
    }
}
