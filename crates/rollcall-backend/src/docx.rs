//! DOCX (Microsoft Word) table source.
//!
//! # Architecture
//!
//! Manual ZIP + XML parsing. A DOCX file is a ZIP archive whose main content
//! lives in `word/document.xml`; tables appear as `w:tbl` elements containing
//! `w:tr` rows and `w:tc` cells, with the visible text inside `w:t` runs.
//!
//! The parser is a single pull-parsing pass tracking `w:tbl`/`w:tr`/`w:tc`
//! nesting with a table depth counter. Tables nested inside a cell are folded
//! into that cell's text rather than extracted separately.

use crate::DOCUMENT_XML;
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use rollcall_core::{DocumentSource, Result, RollcallError, TableData};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Table source for `.docx` documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxSource;

impl DocxSource {
    /// Create a new DOCX source.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Pull `word/document.xml` out of the ZIP container.
    fn document_xml(data: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| RollcallError::InvalidFormat(format!("not a DOCX archive: {e}")))?;
        let mut entry = archive.by_name(DOCUMENT_XML).map_err(|e| {
            RollcallError::InvalidFormat(format!("missing {DOCUMENT_XML} in archive: {e}"))
        })?;
        let mut xml = String::new();
        entry
            .read_to_string(&mut xml)
            .map_err(|e| RollcallError::InvalidFormat(format!("unreadable {DOCUMENT_XML}: {e}")))?;
        Ok(xml)
    }
}

/// Streaming state for one pass over `word/document.xml`.
#[derive(Debug, Default)]
struct TableWalk {
    tables: Vec<TableData>,
    current_rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    current_cell: String,
    /// `w:tbl` nesting depth. Only depth 1 produces rows and cells; anything
    /// deeper is folded into the enclosing cell's text.
    table_depth: usize,
    in_row: bool,
    in_cell: bool,
    in_text: bool,
    /// Paragraph already closed inside the current cell; the next run gets a
    /// separating space.
    pending_break: bool,
}

impl TableWalk {
    fn handle_start(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.current_rows.clear();
                }
            }
            b"w:tr" if self.table_depth == 1 && !self.in_row => {
                self.in_row = true;
                self.current_row.clear();
            }
            b"w:tc" => {
                if self.table_depth == 1 && self.in_row && !self.in_cell {
                    self.in_cell = true;
                    self.current_cell.clear();
                    self.pending_break = false;
                } else if self.table_depth > 1 && self.in_cell {
                    // Nested cell text joins the outer cell with a space.
                    self.pending_break = true;
                }
            }
            b"w:t" if self.in_cell => {
                self.in_text = true;
                if self.pending_break && !self.current_cell.is_empty() {
                    self.current_cell.push(' ');
                }
                self.pending_break = false;
            }
            _ => {}
        }
    }

    fn handle_end(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => {
                if self.table_depth == 1 {
                    self.tables.push(TableData::new(std::mem::take(&mut self.current_rows)));
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            b"w:tr" if self.table_depth == 1 && self.in_row => {
                self.in_row = false;
                self.current_rows.push(std::mem::take(&mut self.current_row));
            }
            b"w:tc" if self.table_depth == 1 && self.in_cell => {
                self.in_cell = false;
                self.current_row.push(std::mem::take(&mut self.current_cell));
            }
            b"w:t" => self.in_text = false,
            b"w:p" if self.in_cell => self.pending_break = true,
            _ => {}
        }
    }

    fn handle_text(&mut self, text: &str) {
        if self.in_text {
            self.current_cell.push_str(text);
        }
    }
}

impl DocumentSource for DocxSource {
    fn read_tables(&self, data: &[u8]) -> Result<Vec<TableData>> {
        let xml = Self::document_xml(data)?;

        let mut reader = Reader::from_reader(xml.as_bytes());
        let mut walk = TableWalk::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => walk.handle_start(e.name().as_ref()),
                Ok(Event::End(e)) => walk.handle_end(e.name().as_ref()),
                Ok(Event::Text(t)) => {
                    let text = t.unescape().map_err(|e| {
                        RollcallError::InvalidFormat(format!("bad XML text content: {e}"))
                    })?;
                    walk.handle_text(&text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(RollcallError::InvalidFormat(format!(
                        "malformed {DOCUMENT_XML} at byte {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
            buf.clear();
        }

        debug!("docx: extracted {} tables", walk.tables.len());
        Ok(walk.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::tests::docx_bytes_with_body;

    #[test]
    fn test_not_a_zip_is_invalid_format() {
        let err = DocxSource::new().read_tables(b"plain text").unwrap_err();
        assert!(matches!(err, RollcallError::InvalidFormat(_)));
    }

    #[test]
    fn test_zip_without_document_xml_is_invalid_format() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("other.txt", zip::write::SimpleFileOptions::default())
                .unwrap();
            std::io::Write::write_all(&mut writer, b"x").unwrap();
            writer.finish().unwrap();
        }
        let err = DocxSource::new()
            .read_tables(&cursor.into_inner())
            .unwrap_err();
        match err {
            RollcallError::InvalidFormat(msg) => assert!(msg.contains("word/document.xml")),
            _ => panic!("expected InvalidFormat"),
        }
    }

    #[test]
    fn test_no_tables_yields_empty_vec() {
        let data = docx_bytes_with_body("<w:p><w:r><w:t>just a paragraph</w:t></w:r></w:p>");
        assert!(DocxSource::new().read_tables(&data).unwrap().is_empty());
    }

    #[test]
    fn test_single_table_extraction() {
        let body = "<w:tbl>\
            <w:tr><w:tc><w:p><w:r><w:t>1</w:t></w:r></w:p></w:tc>\
                  <w:tc><w:p><w:r><w:t>Alice</w:t></w:r></w:p></w:tc></w:tr>\
            <w:tr><w:tc><w:p><w:r><w:t>2</w:t></w:r></w:p></w:tc>\
                  <w:tc><w:p><w:r><w:t>Bob</w:t></w:r></w:p></w:tc></w:tr>\
            </w:tbl>";
        let tables = DocxSource::new()
            .read_tables(&docx_bytes_with_body(body))
            .unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].rows,
            vec![
                vec!["1".to_string(), "Alice".to_string()],
                vec!["2".to_string(), "Bob".to_string()],
            ]
        );
    }

    #[test]
    fn test_split_runs_concatenate_within_paragraph() {
        let body = "<w:tbl><w:tr><w:tc><w:p>\
            <w:r><w:t>Ali</w:t></w:r><w:r><w:t>ce</w:t></w:r>\
            </w:p></w:tc></w:tr></w:tbl>";
        let tables = DocxSource::new()
            .read_tables(&docx_bytes_with_body(body))
            .unwrap();
        assert_eq!(tables[0].rows, vec![vec!["Alice".to_string()]]);
    }

    #[test]
    fn test_multiple_paragraphs_in_cell_join_with_space() {
        let body = "<w:tbl><w:tr><w:tc>\
            <w:p><w:r><w:t>Lady</w:t></w:r></w:p>\
            <w:p><w:r><w:t>Macbeth</w:t></w:r></w:p>\
            </w:tc></w:tr></w:tbl>";
        let tables = DocxSource::new()
            .read_tables(&docx_bytes_with_body(body))
            .unwrap();
        assert_eq!(tables[0].rows, vec![vec!["Lady Macbeth".to_string()]]);
    }

    #[test]
    fn test_two_tables_in_document_order() {
        let body = "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>first</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
            <w:p><w:r><w:t>between</w:t></w:r></w:p>\
            <w:tbl><w:tr><w:tc><w:p><w:r><w:t>second</w:t></w:r></w:p></w:tc></w:tr></w:tbl>";
        let tables = DocxSource::new()
            .read_tables(&docx_bytes_with_body(body))
            .unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows, vec![vec!["first".to_string()]]);
        assert_eq!(tables[1].rows, vec![vec!["second".to_string()]]);
    }

    #[test]
    fn test_nested_table_folds_into_outer_cell() {
        let body = "<w:tbl>\
            <w:tr><w:tc>\
                <w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
                <w:p><w:r><w:t>outer</w:t></w:r></w:p>\
            </w:tc></w:tr>\
            <w:tr><w:tc><w:p><w:r><w:t>second-row</w:t></w:r></w:p></w:tc></w:tr>\
            </w:tbl>";
        let tables = DocxSource::new()
            .read_tables(&docx_bytes_with_body(body))
            .unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].rows,
            vec![
                vec!["inner outer".to_string()],
                vec!["second-row".to_string()],
            ]
        );
    }

    #[test]
    fn test_table_after_nested_table_extracted_separately() {
        let body = "<w:tbl><w:tr><w:tc>\
            <w:tbl><w:tr><w:tc><w:p><w:r><w:t>deep</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
            </w:tc></w:tr></w:tbl>\
            <w:tbl><w:tr><w:tc><w:p><w:r><w:t>next</w:t></w:r></w:p></w:tc></w:tr></w:tbl>";
        let tables = DocxSource::new()
            .read_tables(&docx_bytes_with_body(body))
            .unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows, vec![vec!["deep".to_string()]]);
        assert_eq!(tables[1].rows, vec![vec!["next".to_string()]]);
    }

    #[test]
    fn test_escaped_entities_unescaped() {
        let body =
            "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Tom &amp; Jerry</w:t></w:r></w:p></w:tc></w:tr></w:tbl>";
        let tables = DocxSource::new()
            .read_tables(&docx_bytes_with_body(body))
            .unwrap();
        assert_eq!(tables[0].rows, vec![vec!["Tom & Jerry".to_string()]]);
    }
}
