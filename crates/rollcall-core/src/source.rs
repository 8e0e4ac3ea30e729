//! Collaborator traits: where documents come from and where reports go.
//!
//! The core only needs two capabilities from the outside world: "enumerate
//! tables in document order" and "persist a report at a path". Each input
//! format implements [`DocumentSource`]; each output format implements
//! [`ReportWriter`]. The aggregation core stays format-agnostic.

use crate::error::{Result, RollcallError};
use crate::types::{ReportDocument, TableData};
use std::path::Path;

/// A parser that can enumerate the tables of a document.
///
/// One implementation per input format. Implementations are read-only and
/// hold no per-document state, so a single instance can serve many calls.
pub trait DocumentSource: Send + Sync {
    /// Parse document bytes into tables, in document order, each as rows of
    /// cell strings.
    ///
    /// # Errors
    /// Returns [`RollcallError::InvalidFormat`] if the bytes cannot be parsed.
    fn read_tables(&self, data: &[u8]) -> Result<Vec<TableData>>;

    /// Read and parse a document from disk.
    ///
    /// # Errors
    /// Returns [`RollcallError::NotFound`] if the path does not exist and
    /// [`RollcallError::InvalidFormat`] for any other read or parse failure.
    fn read_file(&self, path: &Path) -> Result<Vec<TableData>> {
        let data = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RollcallError::NotFound(path.to_path_buf())
            } else {
                RollcallError::InvalidFormat(format!("cannot read {}: {e}", path.display()))
            }
        })?;
        self.read_tables(&data)
    }
}

/// A writer that persists a [`ReportDocument`] as a retrievable artifact.
pub trait ReportWriter: Send + Sync {
    /// Write the report to `path`.
    ///
    /// # Errors
    /// Returns [`RollcallError::WriteError`] if the destination cannot be
    /// created or written.
    fn write(&self, report: &ReportDocument, path: &Path) -> Result<()>;
}
