//! Error types for the rollcall pipeline.
//!
//! Every fallible operation in the core and the backends reports one of the
//! variants below, synchronously, to its immediate caller. Nothing here is
//! retried or logged by the core itself; presentation layers translate these
//! into user-facing messages.

use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for document processing.
///
/// # Examples
///
/// ```rust,ignore
/// use rollcall_core::{DocumentProcessor, RollcallError};
///
/// match processor.process(&source, path) {
///     Ok(result) => println!("{} mentions", result.characters.len()),
///     Err(RollcallError::NotFound(p)) => eprintln!("no such file: {}", p.display()),
///     Err(RollcallError::InvalidFormat(msg)) => eprintln!("unreadable document: {msg}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum RollcallError {
    /// The source document does not exist.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source exists but cannot be interpreted: unparsable archive or
    /// markup, unknown file extension, or a column index no row can satisfy.
    #[error("invalid document: {0}")]
    InvalidFormat(String),

    /// The report destination could not be created or written.
    #[error("failed to write report to {}: {source}", .path.display())]
    WriteError {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Malformed call arguments that the type system cannot rule out,
    /// such as an output path without a file name.
    #[error("invalid argument: {0}")]
    Validation(String),
}

impl RollcallError {
    /// Build a [`RollcallError::WriteError`] from a destination and any
    /// error that can be carried as an IO error.
    #[inline]
    pub fn write_error<E>(path: &std::path::Path, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::WriteError {
            path: path.to_path_buf(),
            source: std::io::Error::other(source),
        }
    }
}

/// Type alias for `Result<T, RollcallError>`.
pub type Result<T> = std::result::Result<T, RollcallError>;
