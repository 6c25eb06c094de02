//! Run configuration
//!
//! The checker works against a fixed repository layout. These values used to
//! be baked in; keeping them in a `Config` lets tests point the run at fixture
//! files.

use std::path::{Path, PathBuf};

/// Published solutions for the 2025 question catalogue
pub const DEFAULT_PDF_URL: &str = "https://www.tieraerztekammer-nordrhein.de/wp-content/uploads/2024/11/Sachkundefragen-Loesungen-neu-ab-01.01.2025.pdf";

/// Identifier that introduces the embedded question data in the webpage
pub const DEFAULT_DATA_MARKER: &str = "const QUESTIONS_DATA";

pub const DEFAULT_HTML_PATH: &str = "index.html";
pub const DEFAULT_PDF_CACHE_PATH: &str = "reports/loesungen_2025.pdf";
pub const DEFAULT_REPORT_PATH: &str = "reports/answers_report.csv";

/// Everything a single check run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Webpage source holding the local answers
    pub html_path: PathBuf,
    /// Locally cached copy of the solutions PDF
    pub pdf_cache_path: PathBuf,
    /// Where the CSV report is written
    pub report_path: PathBuf,
    /// Download location used when the cache file is absent
    pub pdf_url: String,
    /// Identifier preceding the embedded JSON object
    pub data_marker: String,
    /// Store a downloaded PDF at `pdf_cache_path`
    pub save_download: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            pdf_cache_path: PathBuf::from(DEFAULT_PDF_CACHE_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            pdf_url: DEFAULT_PDF_URL.to_string(),
            data_marker: DEFAULT_DATA_MARKER.to_string(),
            save_download: false,
        }
    }
}

impl Config {
    /// Default layout resolved against a repository root
    pub fn with_root(root: &Path) -> Self {
        let defaults = Self::default();
        Self {
            html_path: root.join(defaults.html_path),
            pdf_cache_path: root.join(defaults.pdf_cache_path),
            report_path: root.join(defaults.report_path),
            ..defaults
        }
    }
}
