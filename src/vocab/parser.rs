use tracing::debug;

use super::boundary::{locate_table, TableBounds};
use super::filter::content_lines;
use super::grouping::EntryGrouper;
use super::{ParseError, VocabularyEntry};
use crate::config::ParserConfig;

/// Extracts vocabulary rows from the plain-text dump of a course document
#[derive(Debug, Clone, Default)]
pub struct VocabularyTableParser {
    config: ParserConfig,
}

/// Where the table sits in a document and how much of it is content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub bounds: TableBounds,
    pub content_lines: usize,
    pub entries: usize,
}

impl VocabularyTableParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse every table row of `text`.
    ///
    /// A document without the start marker is an error; a table with no
    /// content lines parses to an empty list.
    pub fn parse(&self, text: &str) -> Result<Vec<VocabularyEntry>, ParseError> {
        let lines = split_lines(text);
        let bounds = self.locate(&lines)?;
        let content = content_lines(&lines[bounds.start..bounds.end]);

        let entries: Vec<VocabularyEntry> = EntryGrouper::new(&content, &self.config).collect();
        debug!(
            "Parsed {} entries from {} content lines",
            entries.len(),
            content.len()
        );

        Ok(entries)
    }

    /// Locate the table and count its content lines and rows without
    /// returning the rows themselves
    pub fn inspect(&self, text: &str) -> Result<TableReport, ParseError> {
        let lines = split_lines(text);
        let bounds = self.locate(&lines)?;
        let content = content_lines(&lines[bounds.start..bounds.end]);
        let entries = EntryGrouper::new(&content, &self.config).count();

        Ok(TableReport {
            bounds,
            content_lines: content.len(),
            entries,
        })
    }

    fn locate(&self, lines: &[&str]) -> Result<TableBounds, ParseError> {
        let bounds = locate_table(lines, &self.config.start_marker, &self.config.end_marker)
            .ok_or_else(|| ParseError::StartMarkerNotFound {
                marker: self.config.start_marker.clone(),
            })?;

        debug!(
            "Table spans lines {}..{} (end marker found: {})",
            bounds.start, bounds.end, bounds.end_marker_found
        );

        Ok(bounds)
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(str::trim).collect()
}
