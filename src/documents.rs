use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PlannerError, Result};

/// Joins extracted pages with newlines, dropping pages without text
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages
        .into_iter()
        .filter(|page| !page.as_ref().trim().is_empty())
        .map(|page| page.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn extract_pdf_text(path: &Path) -> Result<String> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| PlannerError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), pages = pages.len(), "pdf pages extracted");
    Ok(join_pages(pages))
}

/// Loads the plain text of one meeting programme.
///
/// PDFs go through `pdf_extract`; anything else is read as UTF-8 text.
/// Returns `None` when the document holds no text at all.
pub fn load_document_text<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        extract_pdf_text(path)?
    } else {
        fs::read_to_string(path)?
    };

    if text.trim().is_empty() {
        warn!(path = %path.display(), "document contains no extractable text, skipping");
        return Ok(None);
    }
    debug!(path = %path.display(), chars = text.len(), "document text loaded");
    Ok(Some(text))
}

/// Loads every document, skipping the ones without text
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        if let Some(text) = load_document_text(path)? {
            texts.push(text);
        }
    }
    Ok(texts)
}
