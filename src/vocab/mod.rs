mod boundary;
mod filter;
mod gloss;
mod grouping;
mod parser;
mod script;
mod soundmark;

pub use boundary::{locate_table, TableBounds};
pub use filter::{content_lines, is_page_number};
pub use gloss::normalize_gloss;
pub use grouping::{EntryGrouper, GroupingState};
pub use parser::{TableReport, VocabularyTableParser};
pub use script::{classify, is_chinese, Script};
pub use soundmark::split_headword;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of a vocabulary table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub chinese: String,
    pub english: String,
    pub soundmark: String,
}

impl VocabularyEntry {
    pub fn new(chinese: &str, english: &str, soundmark: &str) -> Self {
        Self {
            chinese: chinese.to_string(),
            english: english.to_string(),
            soundmark: soundmark.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Vocabulary table not found: no line equals start marker {marker:?}")]
    StartMarkerNotFound { marker: String },
}
