pub mod pdf_parser;

pub use pdf_parser::{extract_text_from_pdf, PdfContent};
