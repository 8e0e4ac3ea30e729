//! # Rollcall Core - Character-Mention Analysis
//!
//! Rollcall counts character-name mentions in tabular documents and shapes
//! the counts into an exportable report. This crate is the format-agnostic
//! pipeline; concrete document parsers and writers live in
//! `rollcall-backend`.
//!
//! ## Pipeline
//!
//! ```rust,ignore
//! // Note: concrete sources/writers are in the rollcall-backend crate
//! use rollcall_backend::{source_for, writer_for};
//! use rollcall_core::{DocumentProcessor, ProcessorOptions, Result};
//!
//! fn main() -> Result<()> {
//!     let options = ProcessorOptions::default()
//!         .with_column(1)
//!         .with_minimum_mentions(2)
//!         .with_ignore_case(true);
//!     let processor = DocumentProcessor::with_options(options);
//!
//!     let source = source_for("script.docx".as_ref())?;
//!     let result = processor.process(source.as_ref(), "script.docx".as_ref())?;
//!
//!     let writer = writer_for("report.docx".as_ref())?;
//!     processor.export_report(writer.as_ref(), &result, "report.docx".as_ref())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`processor`] - [`DocumentProcessor`] orchestration and options
//! - [`reader`] - column extraction over parsed tables
//! - [`aggregate`] - deterministic mention counting
//! - [`report`] - frequency-table shaping
//! - [`source`] - collaborator traits ([`DocumentSource`], [`ReportWriter`])
//! - [`types`] - data model
//! - [`error`] - error taxonomy
//!
//! ## Contract
//!
//! Every call is synchronous and blocking, holds no state across
//! invocations, and either completes or returns an error. The core never
//! logs, never retries, and never swallows a failure.

pub mod aggregate;
pub mod error;
pub mod processor;
pub mod reader;
pub mod report;
pub mod source;
pub mod types;

pub use error::{Result, RollcallError};
pub use processor::{DocumentProcessor, ProcessorOptions, REPORT_TITLE};
pub use report::REPORT_HEADER;
pub use source::{DocumentSource, ReportWriter};
pub use types::{
    CharacterStat, ProcessingResult, ReportBlock, ReportDocument, TableData,
};
