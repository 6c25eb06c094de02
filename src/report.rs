//! Comparison of the two answer maps and the CSV report

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::answers::{sorted_letters, AnswerMap};
use crate::error::{Error, Result};

/// CSV header columns
pub const REPORT_HEADER: [&str; 4] = ["question", "pdf_answers", "local_answers", "match"];

/// Mismatches listed on the console; the report always has all of them
pub const MAX_LISTED_MISMATCHES: usize = 20;

/// One line of the CSV report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub question: u32,
    /// Sorted PDF letters, concatenated
    pub pdf_answers: String,
    /// Sorted local letters, concatenated
    pub local_answers: String,
    /// Both sides agree and are non-empty
    pub matched: bool,
}

impl ReportRow {
    fn to_record(&self) -> [String; 4] {
        [
            self.question.to_string(),
            self.pdf_answers.clone(),
            self.local_answers.clone(),
            if self.matched { "yes" } else { "no" }.to_string(),
        ]
    }
}

/// Python-style list literal, `['A', 'B']`
fn format_letters(letters: &[String]) -> String {
    let items: Vec<String> = letters.iter().map(|l| format!("'{}'", l)).collect();
    format!("[{}]", items.join(", "))
}

/// A question whose sorted letter lists differ between the sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub question: u32,
    pub local: Vec<String>,
    pub pdf: Vec<String>,
}

/// Result of comparing the PDF answers against the local answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
    mismatches: Vec<Mismatch>,
}

/// Compare both maps over the union of their question numbers
///
/// A question with no letters on either side is not a mismatch, but its row
/// is still marked `no`.
pub fn compare(pdf: &AnswerMap, local: &AnswerMap) -> Report {
    let questions: BTreeSet<u32> = pdf.keys().chain(local.keys()).copied().collect();

    let mut rows = Vec::with_capacity(questions.len());
    let mut mismatches = Vec::new();

    for question in questions {
        let pdf_letters = sorted_letters(pdf, question);
        let local_letters = sorted_letters(local, question);

        let pdf_answers = pdf_letters.concat();
        let local_answers = local_letters.concat();
        let matched = pdf_answers == local_answers && !pdf_answers.is_empty();

        rows.push(ReportRow {
            question,
            pdf_answers,
            local_answers,
            matched,
        });

        if pdf_letters != local_letters {
            mismatches.push(Mismatch {
                question,
                local: local_letters,
                pdf: pdf_letters,
            });
        }
    }

    log::debug!("Compared {} questions, {} mismatches", rows.len(), mismatches.len());
    Report { rows, mismatches }
}

impl Report {
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn has_mismatches(&self) -> bool {
        !self.mismatches.is_empty()
    }

    /// Render the CSV body, every line newline-terminated
    ///
    /// Fields are quoted only when they contain a delimiter, quote or line
    /// break, so letters taken as-is from the webpage cannot split a row.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(REPORT_HEADER)?;
        for row in &self.rows {
            writer.write_record(row.to_record())?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write the CSV to `path`, replacing any previous report
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_csv()?)?;
        log::info!("Wrote {} report rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    /// Console summary: report location, then either the mismatches or an
    /// all-clear line
    pub fn print_summary<W: Write>(&self, out: &mut W, report_path: &Path) -> std::io::Result<()> {
        writeln!(out, "Report written: {}", report_path.display())?;

        if self.has_mismatches() {
            writeln!(out, "Mismatches: {}", self.mismatches.len())?;
            for m in self.mismatches.iter().take(MAX_LISTED_MISMATCHES) {
                writeln!(
                    out,
                    "- {}: local={} pdf={}",
                    m.question,
                    format_letters(&m.local),
                    format_letters(&m.pdf)
                )?;
            }
        } else {
            writeln!(out, "All answers match.")?;
        }

        Ok(())
    }
}
