use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Header line that opens the vocabulary table ("Chinese / English / K.K. phonetic symbols")
pub const DEFAULT_START_MARKER: &str = "中文 英文 K.K.音标";
/// Header line of the verb conjugation table that follows it
pub const DEFAULT_END_MARKER: &str = "中文 原形 第三人称单数 过去式 ing形式";
pub const DEFAULT_GLOSS_SEPARATOR: &str = "，";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub start_marker: String,
    pub end_marker: String,
    /// Joins the lines of a wrapped gloss
    pub gloss_separator: String,
    /// Keep the separator in the output instead of stripping it
    pub preserve_gloss_separator: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            gloss_separator: DEFAULT_GLOSS_SEPARATOR.to_string(),
            preserve_gloss_separator: false,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.start_marker.trim().is_empty(), "start_marker must not be empty");
        ensure!(!self.end_marker.trim().is_empty(), "end_marker must not be empty");
        ensure!(
            self.start_marker != self.end_marker,
            "start_marker and end_marker must differ"
        );
        ensure!(!self.gloss_separator.is_empty(), "gloss_separator must not be empty");
        Ok(())
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the JSON written for each course
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.parser.validate()
    }
}
