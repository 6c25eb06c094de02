//! Solutions PDF handling

pub mod answers;
pub mod source;
pub mod text;

// Re-export commonly used items
pub use answers::parse_answer_lines;
pub use source::{download_pdf, load_pdf_bytes};
pub use text::{ensure_available, extract_page_texts, extract_text};

use crate::answers::AnswerMap;
use crate::error::Result;

/// Recover the answer map from the raw bytes of the solutions PDF
pub fn extract_pdf_answers(pdf_bytes: &[u8]) -> Result<AnswerMap> {
    let text = extract_text(pdf_bytes)?;
    let answers = parse_answer_lines(&text);
    log::info!("Recovered {} answers from PDF", answers.len());
    Ok(answers)
}
