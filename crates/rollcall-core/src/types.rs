//! Core data model: extracted tables, mention statistics, and the report
//! document handed to writers.
//!
//! All three pipeline types are created fresh per invocation and owned by the
//! caller once returned; the pipeline keeps no reference and no cross-call
//! state.

use serde::{Deserialize, Serialize};

/// Number of times a single character was mentioned.
///
/// Immutable once produced. Within one [`summarise`](crate::aggregate::summarise)
/// result no two entries share the same name under the active case rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStat {
    /// Display name. Under case-insensitive grouping this is the
    /// first-encountered casing, not the most frequent one.
    pub name: String,
    /// Occurrence count, always >= 1.
    pub count: usize,
}

impl CharacterStat {
    /// Create a new stat entry.
    #[inline]
    #[must_use]
    pub const fn new(name: String, count: usize) -> Self {
        Self { name, count }
    }
}

/// One extracted table, verbatim.
///
/// Rectangularity is assumed but not required: a short row means missing
/// trailing cells, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Rows in document order, each a sequence of cell strings.
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create a table from rows.
    #[inline]
    #[must_use]
    pub const fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Widest row in the table, 0 for an empty table.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Full snapshot of a processed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Raw, unaggregated column strings in document order. Duplicates allowed.
    pub characters: Vec<String>,
    /// Every table found in the source, in document order.
    pub tables: Vec<TableData>,
}

/// One block of the exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportBlock {
    /// Section heading, level 1 is the document title.
    Heading {
        /// Heading level, 1-based.
        level: u8,
        /// Heading text.
        text: String,
    },
    /// Plain paragraph text.
    Paragraph(String),
    /// Tabular block.
    Table(TableData),
}

/// Report structure handed to a [`ReportWriter`](crate::source::ReportWriter).
///
/// Writers that cannot represent headings or paragraphs (CSV) may keep only
/// the table blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Blocks in output order.
    pub blocks: Vec<ReportBlock>,
}

impl ReportDocument {
    /// Tables contained in the report, in order.
    pub fn tables(&self) -> impl Iterator<Item = &TableData> {
        self.blocks.iter().filter_map(|block| match block {
            ReportBlock::Table(table) => Some(table),
            _ => None,
        })
    }
}
