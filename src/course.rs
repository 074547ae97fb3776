use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

use crate::config::OutputConfig;
use crate::utils::extract_text_from_pdf;
use crate::vocab::{VocabularyEntry, VocabularyTableParser};

/// Kind of course document, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// Text already extracted from a PDF
    Text,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

/// Outcome of converting one course document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseReport {
    pub name: String,
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub entries: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_documents: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub total_entries: usize,
    pub documents: Vec<CourseReport>,
}

impl BatchSummary {
    pub fn from_reports(documents: Vec<CourseReport>) -> Self {
        let failed = documents.iter().filter(|doc| doc.error.is_some()).count();
        Self {
            total_documents: documents.len(),
            succeeded: documents.len() - failed,
            failed,
            total_entries: documents.iter().map(|doc| doc.entries).sum(),
            documents,
        }
    }
}

/// Course name used for the output file: the source file stem
pub fn course_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Find every course document under `dir`, skipping hidden files, in path order
pub fn discover_course_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Input directory does not exist: {:?}", dir);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.into_path())
        .filter(|path| DocumentKind::from_path(path).is_some())
        .collect();

    files.sort();
    Ok(files)
}

/// Keep only the files whose course name is listed in `names`; an empty list keeps all
pub fn select_courses(files: Vec<PathBuf>, names: &[String]) -> Vec<PathBuf> {
    if names.is_empty() {
        return files;
    }

    files
        .into_iter()
        .filter(|path| names.iter().any(|name| *name == course_name(path)))
        .collect()
}

/// Read the plain text of a course document
pub fn read_document_text(path: &Path) -> Result<String> {
    match DocumentKind::from_path(path) {
        Some(DocumentKind::Pdf) => {
            let content = extract_text_from_pdf(path)?;
            if !content.has_text {
                anyhow::bail!("PDF has no extractable text: {:?}", path);
            }
            Ok(content.text)
        }
        Some(DocumentKind::Text) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {:?}", path)),
        None => anyhow::bail!("Unsupported file format: {:?}", path),
    }
}

/// Extract and parse the vocabulary table of one document
pub fn parse_course(path: &Path, parser: &VocabularyTableParser) -> Result<Vec<VocabularyEntry>> {
    let text = read_document_text(path)?;
    let entries = parser
        .parse(&text)
        .with_context(|| format!("Failed to parse vocabulary table: {:?}", path))?;
    Ok(entries)
}

pub fn entries_to_json(entries: &[VocabularyEntry], output: &OutputConfig) -> Result<String> {
    let json = if output.pretty {
        serde_json::to_string_pretty(entries)
    } else {
        serde_json::to_string(entries)
    };
    json.with_context(|| "Failed to serialize vocabulary entries")
}

pub fn write_entries(path: &Path, entries: &[VocabularyEntry], output: &OutputConfig) -> Result<()> {
    let json = entries_to_json(entries, output)?;
    fs::write(path, json).with_context(|| format!("Failed to write course JSON: {:?}", path))?;
    Ok(())
}

/// Parse one document and write `<output_dir>/<name>.json`.
///
/// Failures are captured in the report so the rest of a batch carries on.
pub fn convert_course(
    path: &Path,
    output_dir: &Path,
    parser: &VocabularyTableParser,
    output: &OutputConfig,
) -> CourseReport {
    let name = course_name(path);
    let target = output_dir.join(format!("{}.json", name));

    let result = parse_course(path, parser).and_then(|entries| {
        write_entries(&target, &entries, output)?;
        Ok(entries.len())
    });

    match result {
        Ok(entries) => {
            info!("Written: {} ({} entries)", name, entries);
            CourseReport {
                name,
                source: path.to_path_buf(),
                output: Some(target),
                entries,
                error: None,
            }
        }
        Err(e) => CourseReport {
            name,
            source: path.to_path_buf(),
            output: None,
            entries: 0,
            error: Some(format!("{:#}", e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind() {
        assert_eq!(DocumentKind::from_path(Path::new("a/unit1.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("unit1.txt")), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_path(Path::new("unit1.epub")), None);
        assert_eq!(DocumentKind::from_path(Path::new("unit1")), None);
    }

    #[test]
    fn test_course_name() {
        assert_eq!(course_name(Path::new("pdf/01-starter.pdf")), "01-starter");
    }

    #[test]
    fn test_select_courses() {
        let files = vec![PathBuf::from("pdf/a.pdf"), PathBuf::from("pdf/b.pdf")];

        assert_eq!(select_courses(files.clone(), &[]).len(), 2);
        assert_eq!(
            select_courses(files, &["b".to_string()]),
            vec![PathBuf::from("pdf/b.pdf")]
        );
    }

    #[test]
    fn test_entries_to_json_field_order() {
        let entries = vec![VocabularyEntry::new("快乐", "happy", "/hæpi/")];
        let json = entries_to_json(&entries, &OutputConfig::default()).unwrap();

        assert_eq!(
            json,
            r#"[{"chinese":"快乐","english":"happy","soundmark":"/hæpi/"}]"#
        );
    }

    #[test]
    fn test_summary_counts() {
        let ok = CourseReport {
            name: "a".to_string(),
            source: PathBuf::from("a.txt"),
            output: Some(PathBuf::from("a.json")),
            entries: 3,
            error: None,
        };
        let failed = CourseReport {
            name: "b".to_string(),
            source: PathBuf::from("b.txt"),
            output: None,
            entries: 0,
            error: Some("boom".to_string()),
        };

        let summary = BatchSummary::from_reports(vec![ok, failed]);
        assert_eq!(summary.total_documents, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_entries, 3);
    }
}
