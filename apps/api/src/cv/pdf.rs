//! PDF text extraction wrapper around the `pdf-extract` crate.
//!
//! Output is capped so the model prompt stays bounded; a capped text ends
//! with `TRUNCATION_MARKER`.

use std::any::Any;
use std::panic;

use thiserror::Error;

pub const TRUNCATION_MARKER: &str = "\n\n[TRUNCATED]";
const MIN_PDF_BYTES: usize = 5;
const PAGE_SEPARATOR: &str = "\n\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdfError {
    #[error("Empty or invalid PDF file.")]
    TooShort,

    #[error("Failed to read PDF: {0}")]
    Unreadable(String),

    #[error("No extractable text found (PDF may be scanned/image-only).")]
    NoText,
}

/// Extracts the text of every page, joined and capped to `max_chars` characters.
///
/// CPU-bound: call it from a blocking task.
pub fn extract_text(bytes: &[u8], max_chars: usize) -> Result<String, PdfError> {
    if bytes.len() < MIN_PDF_BYTES {
        return Err(PdfError::TooShort);
    }
    let pages = read_pages(bytes)?;
    normalize_pages(&pages, max_chars)
}

fn read_pages(bytes: &[u8]) -> Result<Vec<String>, PdfError> {
    // pdf-extract panics on some malformed documents instead of returning Err.
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes)) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(PdfError::Unreadable(e.to_string())),
        Err(payload) => Err(PdfError::Unreadable(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "parser panicked".to_string()
    }
}

/// Joins the non-blank pages with a blank line, trims, and applies the cap.
pub fn normalize_pages<S: AsRef<str>>(pages: &[S], max_chars: usize) -> Result<String, PdfError> {
    let joined = pages
        .iter()
        .map(AsRef::as_ref)
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR);
    let text = joined.trim();

    if text.is_empty() {
        return Err(PdfError::NoText);
    }

    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Ok(format!("{}{TRUNCATION_MARKER}", &text[..cut])),
        None => Ok(text.to_string()),
    }
}
