// Library exports for use in scripts and other binaries

pub mod config;
pub mod course;
pub mod utils;
pub mod vocab;

// Re-export commonly used types
pub use config::{AppConfig, OutputConfig, ParserConfig};
pub use vocab::{ParseError, VocabularyEntry, VocabularyTableParser};
