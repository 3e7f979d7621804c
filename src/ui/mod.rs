//! User interface module - output policy and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Verbosity and output format (text or JSON)

use serde::Serialize;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_commit_records, display_error, display_status,
    display_success, format_commit_record, format_verdict,
};

use crate::boundary::BoundaryWarning;
use crate::domain::CommitRecord;
use crate::validator::{Verdict, VerdictStatus};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper: every line the wrapper prints goes through here.
///
/// In JSON mode only the final verdict (or error) is printed, so stdout stays
/// machine readable.
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose && self.format == OutputFormat::Text
    }

    /// Intermediate state, shown only in verbose text mode
    pub fn info(&self, message: &str) {
        if self.is_verbose() {
            display_status(message);
        }
    }

    pub fn warning(&self, warning: &BoundaryWarning) {
        if self.is_verbose() {
            display_boundary_warning(warning);
        }
    }

    pub fn commits(&self, records: &[CommitRecord], latest_tag: &str) {
        if self.is_verbose() {
            display_commit_records(records, latest_tag);
        }
    }

    /// Final outcome line (text) or verdict object (JSON)
    pub fn verdict(&self, verdict: &Verdict) {
        match self.format {
            OutputFormat::Text => {
                let message = format_verdict(verdict);
                match verdict.status {
                    VerdictStatus::Mismatch => display_error(&message),
                    VerdictStatus::Match if !self.verbose => {}
                    VerdictStatus::Match => display_success(&message),
                    VerdictStatus::NotApplicable => display_status(&message),
                }
            }
            OutputFormat::Json => self.data(verdict),
        }
    }

    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => display_error(message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }
}
