//! Report writers.
//!
//! [`DocxReportWriter`] emits a minimal OOXML package: `[Content_Types].xml`,
//! `_rels/.rels`, `word/styles.xml`, and `word/document.xml` with heading
//! paragraphs and `w:tbl` structures. The parts mirror what [`DocxSource`]
//! parses, so an exported report can be re-processed.
//!
//! [`CsvReportWriter`] persists the frequency table only; headings and
//! paragraphs have no CSV representation.
//!
//! [`DocxSource`]: crate::DocxSource

use crate::DOCUMENT_XML;
use log::debug;
use quick_xml::escape::escape;
use rollcall_core::{ReportBlock, ReportDocument, ReportWriter, Result, RollcallError, TableData};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// Heading styles referenced by `w:pStyle` in the document body.
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:rPr><w:b/><w:sz w:val="32"/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style>
<w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/><w:rPr><w:b/><w:sz w:val="24"/></w:rPr></w:style>
</w:styles>"#;

/// Report writer producing `.docx` files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxReportWriter;

impl DocxReportWriter {
    /// Create a new DOCX report writer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn push_heading(xml: &mut String, level: u8, text: &str) {
        // Word defines Heading1..Heading9; clamp anything deeper.
        let level = level.clamp(1, 9);
        let _ = write!(
            xml,
            "<w:p><w:pPr><w:pStyle w:val=\"Heading{level}\"/></w:pPr>\
             <w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
            escape(text)
        );
    }

    fn push_paragraph(xml: &mut String, text: &str) {
        let _ = write!(
            xml,
            "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
            escape(text)
        );
    }

    fn push_table(xml: &mut String, table: &TableData) {
        xml.push_str(
            "<w:tbl><w:tblPr><w:tblBorders>\
             <w:top w:val=\"single\"/><w:bottom w:val=\"single\"/>\
             <w:left w:val=\"single\"/><w:right w:val=\"single\"/>\
             <w:insideH w:val=\"single\"/><w:insideV w:val=\"single\"/>\
             </w:tblBorders></w:tblPr>",
        );
        // Pad short rows so every row has the full grid width.
        let width = table.width();
        for row in &table.rows {
            xml.push_str("<w:tr>");
            for idx in 0..width {
                let cell = row.get(idx).map_or("", String::as_str);
                let _ = write!(
                    xml,
                    "<w:tc><w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p></w:tc>",
                    escape(cell)
                );
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl>");
    }

    fn document_xml(report: &ReportDocument) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>",
        );
        for block in &report.blocks {
            match block {
                ReportBlock::Heading { level, text } => Self::push_heading(&mut xml, *level, text),
                ReportBlock::Paragraph(text) => Self::push_paragraph(&mut xml, text),
                ReportBlock::Table(table) => Self::push_table(&mut xml, table),
            }
        }
        xml.push_str("</w:body></w:document>");
        xml
    }
}

impl ReportWriter for DocxReportWriter {
    fn write(&self, report: &ReportDocument, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|source| RollcallError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut archive = ZipWriter::new(file);
        let document = Self::document_xml(report);
        let parts: [(&str, &str); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", RELS_XML),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
            ("word/styles.xml", STYLES_XML),
            (DOCUMENT_XML, document.as_str()),
        ];

        for (name, content) in parts {
            archive
                .start_file(name, SimpleFileOptions::default())
                .map_err(|e| RollcallError::write_error(path, e))?;
            archive
                .write_all(content.as_bytes())
                .map_err(|source| RollcallError::WriteError {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        archive
            .finish()
            .map_err(|e| RollcallError::write_error(path, e))?;

        debug!("docx: wrote report with {} blocks to {}", report.blocks.len(), path.display());
        Ok(())
    }
}

/// Report writer producing `.csv` files.
///
/// Only the first table block (the frequency table) is written; CSV has no
/// representation for headings, paragraphs, or multiple tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CsvReportWriter;

impl CsvReportWriter {
    /// Create a new CSV report writer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportWriter for CsvReportWriter {
    fn write(&self, report: &ReportDocument, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|source| RollcallError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = ::csv::Writer::from_writer(file);
        if let Some(table) = report.tables().next() {
            for row in &table.rows {
                writer
                    .write_record(row)
                    .map_err(|e| RollcallError::write_error(path, e))?;
            }
        }
        writer
            .flush()
            .map_err(|source| RollcallError::WriteError {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(())
    }
}
