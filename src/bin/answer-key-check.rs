//! Answer Key Check CLI tool
//!
//! Compares the answers embedded in the quiz webpage with the published
//! solutions PDF and writes a CSV report.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use answer_key_check::{check, Config};

/// Answer Key Check - Verify local answers against the solutions PDF
#[derive(Parser)]
#[command(name = "answer-key-check")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXIT STATUS:
    0  all answers match
    1  setup failure (missing webpage, PDF download or read failed)
    2  report written, mismatches found

EXAMPLES:
    # Check the repository in the current directory
    answer-key-check

    # Check another checkout and keep the downloaded PDF for next time
    answer-key-check --root ../quiz --save-pdf")]
struct Cli {
    /// Repository root the default paths are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Webpage holding the embedded question data
    #[arg(long)]
    html: Option<PathBuf>,

    /// Cached solutions PDF (downloaded when missing)
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// CSV report output path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Download URL for the solutions PDF
    #[arg(long)]
    url: Option<String>,

    /// Identifier introducing the embedded question data
    #[arg(long)]
    marker: Option<String>,

    /// Store a downloaded PDF at the cache path
    #[arg(long)]
    save_pdf: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let defaults = Config::with_root(&self.root);
        Config {
            html_path: self.html.unwrap_or(defaults.html_path),
            pdf_cache_path: self.pdf.unwrap_or(defaults.pdf_cache_path),
            report_path: self.report.unwrap_or(defaults.report_path),
            pdf_url: self.url.unwrap_or(defaults.pdf_url),
            data_marker: self.marker.unwrap_or(defaults.data_marker),
            save_download: self.save_pdf,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    log::debug!("Configuration: {:?}", config);

    match check::run(&config) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) if e.is_setup_failure() => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        // Malformed question data and missing PDF support are not caught
        Err(e) => Err(e.into()),
    }
}
