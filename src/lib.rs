//! Answer Key Check Library
//!
//! Cross-checks the multiple-choice answers embedded in a quiz webpage against
//! the officially published solutions PDF.
//! This library provides functionality to:
//! - Load the answers embedded as JSON in the webpage source
//! - Extract text from the solutions PDF and recover its answers
//! - Compare both answer sets and write a CSV report
//!
//! # Example
//!
//! ```no_run
//! use answer_key_check::{check, Config};
//! use std::path::Path;
//!
//! let config = Config::with_root(Path::new("."));
//! let outcome = check::run(&config).expect("Check failed");
//! std::process::exit(outcome.exit_code());
//! ```

pub mod answers;
pub mod check;
pub mod config;
pub mod error;
pub mod local;
pub mod pdf;
pub mod report;

// Re-export commonly used items
pub use answers::AnswerMap;
pub use check::Outcome;
pub use config::Config;
pub use error::{Error, Result};
