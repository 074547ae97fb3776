use anyhow::{Context, Result};
use pdf_extract::extract_text;
use std::path::Path;
use tracing::{info, warn};

/// Plain text pulled out of a PDF
#[derive(Debug, Clone)]
pub struct PdfContent {
    pub text: String,
    pub has_text: bool,
}

/// Extract text from a PDF file
pub fn extract_text_from_pdf(path: &Path) -> Result<PdfContent> {
    info!("Extracting text from PDF: {:?}", path);

    let text = extract_text(path)
        .with_context(|| format!("Failed to extract text from PDF: {:?}", path))?;

    let has_text = !text.trim().is_empty();

    if !has_text {
        warn!("PDF appears to be scanned or has no extractable text: {:?}", path);
    }

    // Page breaks come through as form feeds; the table parser splits on '\n' only
    let text = text.replace('\x0C', "\n");

    info!("Extracted {} lines from PDF", text.lines().count());

    Ok(PdfContent { text, has_text })
}
