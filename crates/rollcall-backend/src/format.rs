//! Input and output format detection from file extensions.

use rollcall_core::{Result, RollcallError};
use std::path::Path;

/// Input formats with a table-yielding source implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// Microsoft Word (.docx)
    Docx,
    /// Comma-separated values (.csv)
    Csv,
    /// Microsoft Excel (.xlsx)
    Xlsx,
}

impl InputFormat {
    /// Detect the input format from a path's extension.
    ///
    /// # Errors
    /// Returns [`RollcallError::InvalidFormat`] for a missing or unsupported
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "docx" => Ok(Self::Docx),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "" => Err(RollcallError::InvalidFormat(format!(
                "no file extension: {}",
                path.display()
            ))),
            other => Err(RollcallError::InvalidFormat(format!(
                "unsupported input format: .{other}"
            ))),
        }
    }
}

/// Output formats with a report writer implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Microsoft Word (.docx)
    Docx,
    /// Comma-separated values (.csv), frequency table only
    Csv,
}

impl OutputFormat {
    /// Detect the output format from a path's extension.
    ///
    /// # Errors
    /// Returns [`RollcallError::InvalidFormat`] for a missing or unsupported
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "docx" => Ok(Self::Docx),
            "csv" => Ok(Self::Csv),
            "" => Err(RollcallError::InvalidFormat(format!(
                "no file extension: {}",
                path.display()
            ))),
            other => Err(RollcallError::InvalidFormat(format!(
                "unsupported report format: .{other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_detection() {
        assert_eq!(
            InputFormat::from_path(Path::new("a/b/script.docx")).unwrap(),
            InputFormat::Docx
        );
        assert_eq!(
            InputFormat::from_path(Path::new("names.CSV")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("cast.xlsx")).unwrap(),
            InputFormat::Xlsx
        );
    }

    #[test]
    fn test_unknown_input_extension_is_invalid_format() {
        let err = InputFormat::from_path(Path::new("scan.pdf")).unwrap_err();
        match err {
            RollcallError::InvalidFormat(msg) => assert!(msg.contains(".pdf")),
            _ => panic!("expected InvalidFormat"),
        }
    }

    #[test]
    fn test_missing_extension_is_invalid_format() {
        assert!(InputFormat::from_path(Path::new("README")).is_err());
        assert!(OutputFormat::from_path(Path::new("report")).is_err());
    }

    #[test]
    fn test_output_format_detection() {
        assert_eq!(
            OutputFormat::from_path(Path::new("report.docx")).unwrap(),
            OutputFormat::Docx
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("report.csv")).unwrap(),
            OutputFormat::Csv
        );
        assert!(OutputFormat::from_path(Path::new("report.xlsx")).is_err());
    }
}
