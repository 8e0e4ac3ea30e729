//! # Rollcall Backend - Document Sources and Report Writers
//!
//! Concrete collaborators for the rollcall pipeline: one
//! [`DocumentSource`] per input format (DOCX, CSV, XLSX) and one
//! [`ReportWriter`] per output format (DOCX, CSV), plus extension-based
//! dispatch.
//!
//! ```rust,ignore
//! use rollcall_backend::{source_for, writer_for};
//! use rollcall_core::DocumentProcessor;
//!
//! let processor = DocumentProcessor::new();
//! let source = source_for("cast.csv".as_ref())?;
//! let result = processor.process(source.as_ref(), "cast.csv".as_ref())?;
//! ```

pub mod csv;
pub mod docx;
pub mod format;
pub mod writer;
pub mod xlsx;

pub use csv::CsvSource;
pub use docx::DocxSource;
pub use format::{InputFormat, OutputFormat};
pub use writer::{CsvReportWriter, DocxReportWriter};
pub use xlsx::XlsxSource;

use rollcall_core::{DocumentSource, ReportWriter, Result};
use std::path::Path;

/// Main content part of a DOCX archive.
pub(crate) const DOCUMENT_XML: &str = "word/document.xml";

/// Pick the [`DocumentSource`] matching the path's extension.
///
/// # Errors
/// Returns [`rollcall_core::RollcallError::InvalidFormat`] for unsupported
/// extensions.
pub fn source_for(path: &Path) -> Result<Box<dyn DocumentSource>> {
    Ok(match InputFormat::from_path(path)? {
        InputFormat::Docx => Box::new(DocxSource::new()),
        InputFormat::Csv => Box::new(CsvSource::new()),
        InputFormat::Xlsx => Box::new(XlsxSource::new()),
    })
}

/// Pick the [`ReportWriter`] matching the path's extension.
///
/// # Errors
/// Returns [`rollcall_core::RollcallError::InvalidFormat`] for unsupported
/// extensions.
pub fn writer_for(path: &Path) -> Result<Box<dyn ReportWriter>> {
    Ok(match OutputFormat::from_path(path)? {
        OutputFormat::Docx => Box::new(DocxReportWriter::new()),
        OutputFormat::Csv => Box::new(CsvReportWriter::new()),
    })
}
