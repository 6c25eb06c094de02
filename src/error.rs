//! Error types for the answer key checker

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the answer key checker
#[derive(Error, Debug)]
pub enum Error {
    /// The webpage holding the local answers does not exist
    #[error("{} not found", .0.display())]
    InputMissing(PathBuf),

    /// Downloading the solutions PDF failed
    #[error("Failed to download PDF: {reason}")]
    FetchFailure {
        url: String,
        reason: String,
    },

    /// The embedded question data could not be located or parsed
    #[error("Question data not usable: {0}")]
    StructureNotFound(String),

    /// PDF text extraction was not compiled in
    #[error("PDF support unavailable: {0}")]
    DependencyMissing(String),

    /// PDF processing error
    #[cfg(feature = "pdf")]
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Setup failures are reported cleanly by the CLI; everything else
    /// propagates out of `main`.
    pub fn is_setup_failure(&self) -> bool {
        matches!(
            self,
            Error::InputMissing(_) | Error::FetchFailure { .. } | Error::Io(_)
        )
    }
}
