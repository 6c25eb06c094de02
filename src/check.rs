//! One full check run: load both answer sources, compare, report

use std::io::Write;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::local::load_local_answers_from_file;
use crate::pdf::{ensure_available, extract_pdf_answers, load_pdf_bytes};
use crate::report::compare;

/// How a completed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question agrees
    Clean,
    /// The report was written but this many questions disagree
    MismatchesFound(usize),
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::MismatchesFound(_) => 2,
        }
    }
}

/// Run the check, writing the console summary to `out`
pub fn run_with_output<W: Write>(config: &Config, out: &mut W) -> Result<Outcome> {
    ensure_available()?;

    if !config.html_path.exists() {
        return Err(Error::InputMissing(config.html_path.clone()));
    }

    let pdf_bytes = load_pdf_bytes(config)?;
    let pdf_answers = extract_pdf_answers(&pdf_bytes)?;
    let local_answers = load_local_answers_from_file(&config.html_path, &config.data_marker)?;

    let report = compare(&pdf_answers, &local_answers);
    report.write_csv(&config.report_path)?;
    report.print_summary(out, &config.report_path)?;

    if report.has_mismatches() {
        Ok(Outcome::MismatchesFound(report.mismatches().len()))
    } else {
        Ok(Outcome::Clean)
    }
}

/// Run the check with the summary on stdout
pub fn run(config: &Config) -> Result<Outcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}
