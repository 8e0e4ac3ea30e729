//! Pipeline orchestration.
//!
//! [`DocumentProcessor`] ties the pieces together: a [`DocumentSource`] yields
//! tables, [`read_column`](crate::reader::read_column) extracts the character
//! column, [`summarise`](crate::aggregate::summarise) counts mentions, and
//! [`report::build`](crate::report::build) shapes the frequency table before
//! it is handed to a [`ReportWriter`].
//!
//! Each invocation runs straight through; any failure is terminal for that
//! call and reported to the caller. There is no retry, no internal
//! concurrency, and no state carried between calls.

use crate::aggregate;
use crate::error::{Result, RollcallError};
use crate::reader;
use crate::report;
use crate::source::{DocumentSource, ReportWriter};
use crate::types::{CharacterStat, ProcessingResult, ReportBlock, ReportDocument, TableData};
use std::path::{Path, PathBuf};

/// Title of the exported report.
pub const REPORT_TITLE: &str = "Character Frequency Analysis";

/// Options for a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessorOptions {
    /// Zero-based index of the column holding character names.
    pub column_index: usize,

    /// Only report characters with at least this many mentions.
    /// 0 and 1 are equivalent (every stat has at least one mention).
    pub minimum_mentions: usize,

    /// Merge names that differ only in case, keeping the first-seen casing
    /// as the display name.
    pub ignore_case: bool,
}

impl ProcessorOptions {
    /// Set the character-name column.
    #[inline]
    #[must_use = "returns options with the column configured"]
    pub const fn with_column(mut self, column_index: usize) -> Self {
        self.column_index = column_index;
        self
    }

    /// Set the minimum-mentions threshold.
    #[inline]
    #[must_use = "returns options with the threshold configured"]
    pub const fn with_minimum_mentions(mut self, minimum_mentions: usize) -> Self {
        self.minimum_mentions = minimum_mentions;
        self
    }

    /// Set case-insensitive grouping.
    #[inline]
    #[must_use = "returns options with case handling configured"]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

impl Default for ProcessorOptions {
    #[inline]
    fn default() -> Self {
        Self {
            // Historical layouts put an id/scene column first and names second.
            column_index: 1,
            minimum_mentions: 1,
            ignore_case: false,
        }
    }
}

/// Orchestrates read → aggregate → report for one document at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocumentProcessor {
    options: ProcessorOptions,
}

impl DocumentProcessor {
    /// Create a processor with default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with explicit options.
    #[inline]
    #[must_use]
    pub const fn with_options(options: ProcessorOptions) -> Self {
        Self { options }
    }

    /// Active options.
    #[inline]
    #[must_use]
    pub const fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Read `path` through `source` and extract the character column along
    /// with every table.
    ///
    /// A document with zero tables yields an empty result.
    ///
    /// # Errors
    /// [`RollcallError::NotFound`] if `path` does not exist,
    /// [`RollcallError::InvalidFormat`] if it cannot be parsed or the
    /// configured column is out of range for every row.
    pub fn process(&self, source: &dyn DocumentSource, path: &Path) -> Result<ProcessingResult> {
        if !path.exists() {
            return Err(RollcallError::NotFound(path.to_path_buf()));
        }

        let tables = source.read_file(path)?;
        let characters = reader::read_column(&tables, self.options.column_index)?;

        Ok(ProcessingResult { characters, tables })
    }

    /// Count mentions in `names`. Thin forwarding wrapper kept for callers
    /// that already own a raw name list.
    #[inline]
    #[must_use]
    pub fn summarise(names: &[String], ignore_case: bool) -> Vec<CharacterStat> {
        aggregate::summarise(names, ignore_case)
    }

    /// Aggregate `result`, assemble the report document, and persist it with
    /// `writer`. Returns `output_path` on success.
    ///
    /// # Errors
    /// [`RollcallError::Validation`] if `output_path` has no file name,
    /// [`RollcallError::WriteError`] if the destination cannot be created.
    pub fn export_report(
        &self,
        writer: &dyn ReportWriter,
        result: &ProcessingResult,
        output_path: &Path,
    ) -> Result<PathBuf> {
        if output_path.file_name().is_none() {
            return Err(RollcallError::Validation(format!(
                "output path has no file name: {}",
                output_path.display()
            )));
        }

        let report = self.build_report(result);
        writer.write(&report, output_path)?;
        Ok(output_path.to_path_buf())
    }

    /// Assemble the full report document for `result`: title, summary,
    /// frequency table, and the source tables.
    #[must_use]
    pub fn build_report(&self, result: &ProcessingResult) -> ReportDocument {
        let stats = aggregate::summarise(&result.characters, self.options.ignore_case);
        let frequency_table = report::build(&stats, self.options.minimum_mentions);
        let retained = frequency_table.rows.len() - 1;

        let mut blocks = vec![
            ReportBlock::Heading {
                level: 1,
                text: REPORT_TITLE.to_string(),
            },
            ReportBlock::Heading {
                level: 2,
                text: "Summary".to_string(),
            },
            ReportBlock::Paragraph(format!(
                "Total mentions: {}. Unique characters: {}. Characters with {}+ mentions: {}.",
                result.characters.len(),
                stats.len(),
                self.options.minimum_mentions,
                retained,
            )),
            ReportBlock::Heading {
                level: 2,
                text: "Characters by Frequency".to_string(),
            },
        ];

        if retained == 0 {
            blocks.push(ReportBlock::Paragraph(
                "No characters meet the minimum frequency criteria.".to_string(),
            ));
        }
        blocks.push(ReportBlock::Table(frequency_table));

        if !result.tables.is_empty() {
            blocks.push(ReportBlock::Heading {
                level: 2,
                text: "Source Tables".to_string(),
            });
            for (idx, table) in result.tables.iter().enumerate() {
                if table.rows.is_empty() {
                    continue;
                }
                blocks.push(ReportBlock::Heading {
                    level: 3,
                    text: format!("Table {}", idx + 1),
                });
                blocks.push(ReportBlock::Table(table.clone()));
            }
        }

        ReportDocument { blocks }
    }

    /// First `max_rows` rows of every table in `path`, for UI display.
    ///
    /// # Errors
    /// Same failure modes as [`DocumentProcessor::process`], minus the column
    /// check: previews do not depend on the configured column.
    pub fn table_preview(
        &self,
        source: &dyn DocumentSource,
        path: &Path,
        max_rows: usize,
    ) -> Result<Vec<TableData>> {
        if !path.exists() {
            return Err(RollcallError::NotFound(path.to_path_buf()));
        }

        let tables = source.read_file(path)?;
        Ok(tables
            .into_iter()
            .map(|table| TableData::new(table.rows.into_iter().take(max_rows).collect()))
            .collect())
    }
}
