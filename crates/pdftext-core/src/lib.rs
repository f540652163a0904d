//! PDF text extraction primitive shared by the HTTP and CLI adapters.
//!
//! All actual PDF parsing is delegated to [`pdf_extract`]; this crate only
//! validates the outcome and translates failures into [`ExtractError`].
//! Since `pdf_extract` can panic on malformed input (rather than returning
//! errors), all calls are wrapped in [`std::panic::catch_unwind`] so that a
//! hostile byte stream never takes down a caller.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Text extracted from a PDF document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Per-page text fragments joined with a single newline. Pages with no
    /// extractable text contribute nothing to the join.
    pub text: String,
    /// Total page count, including pages that yielded no text.
    pub pages: usize,
}

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The bytes are not a well-formed PDF, or the extraction library failed
    /// internally (encrypted documents land here too).
    #[error("{0}")]
    Parse(String),
    /// Structurally valid document, but no page yielded non-whitespace text.
    /// Usually means the document is scanned or image-based and needs OCR.
    #[error("no extractable text in {pages} page(s)")]
    NoText { pages: usize },
}

/// Extract the newline-joined text of all pages from a PDF byte sequence.
///
/// Either fully succeeds or fully fails; no partial output is returned.
/// Returns [`ExtractError::NoText`] when every page is whitespace-only,
/// carrying the page count so callers can still report it.
pub fn extract(data: &[u8]) -> Result<ExtractedText, ExtractError> {
    let pages = extract_pages(data)?;
    let page_count = pages.len();

    let text = pages
        .iter()
        .map(String::as_str)
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        tracing::debug!(pages = page_count, "document has no text layer");
        return Err(ExtractError::NoText { pages: page_count });
    }

    tracing::debug!(pages = page_count, bytes = text.len(), "extracted text");
    Ok(ExtractedText {
        text,
        pages: page_count,
    })
}

/// Run the extraction library, returning one `String` per page. Panics from
/// the underlying library are caught and converted to errors.
fn extract_pages(data: &[u8]) -> Result<Vec<String>, ExtractError> {
    let data = data.to_vec(); // owned copy for the unwind boundary
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&data)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractError::Parse(e.to_string())),
        Err(_) => Err(ExtractError::Parse(
            "extraction panicked (malformed document)".into(),
        )),
    }
}


#[cfg(any(test, feature = "test-util"))]
pub mod test_pdf;
