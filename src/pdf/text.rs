//! Plain text extraction using lopdf

use crate::error::{Error, Result};

#[cfg(feature = "pdf")]
use lopdf::Document;

const REMEDIATION: &str =
    "rebuild with PDF text extraction enabled: cargo install answer-key-check --features pdf";

/// Fail early when PDF text extraction was compiled out
pub fn ensure_available() -> Result<()> {
    if cfg!(feature = "pdf") {
        Ok(())
    } else {
        Err(Error::DependencyMissing(REMEDIATION.to_string()))
    }
}

/// Keep successful page texts, substituting an empty page for each failure.
/// Returns the texts and the number of pages that failed.
#[cfg(feature = "pdf")]
fn collect_page_texts<I, E>(pages: I) -> (Vec<String>, usize)
where
    I: IntoIterator<Item = (u32, std::result::Result<String, E>)>,
    E: std::fmt::Display,
{
    let mut skipped = 0;
    let texts = pages
        .into_iter()
        .map(|(page_num, result)| match result {
            Ok(text) => text,
            Err(e) => {
                log::warn!("No text extracted from page {}: {}", page_num, e);
                skipped += 1;
                String::new()
            }
        })
        .collect();
    (texts, skipped)
}

/// Extract the text of every page, in page order
///
/// Pages that yield no text, or whose content cannot be decoded, come back as
/// empty strings so the page count is preserved.
#[cfg(feature = "pdf")]
pub fn extract_page_texts(pdf_bytes: &[u8]) -> Result<Vec<String>> {
    let doc = Document::load_mem(pdf_bytes)?;
    let pages = doc.get_pages();

    let (texts, skipped) = collect_page_texts(
        pages
            .keys()
            .map(|&page_num| (page_num, doc.extract_text(&[page_num]))),
    );
    log::info!(
        "Extracted text from {} pages, {} unreadable",
        texts.len() - skipped,
        skipped
    );

    Ok(texts)
}

#[cfg(not(feature = "pdf"))]
pub fn extract_page_texts(_pdf_bytes: &[u8]) -> Result<Vec<String>> {
    Err(Error::DependencyMissing(REMEDIATION.to_string()))
}

/// Extract the whole document as text, pages separated by newlines
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String> {
    Ok(extract_page_texts(pdf_bytes)?.join("\n"))
}
