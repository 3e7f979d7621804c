//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from output policy
//! (verbosity, JSON mode), which lives in the parent module.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::CommitRecord;
use crate::validator::{Verdict, VerdictStatus};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("⚠").yellow(), warning);
}

/// One line per record: short hash, type/scope, note count and header.
pub fn format_commit_record(record: &CommitRecord) -> String {
    let short_hash = record.hash.get(..7).unwrap_or(record.hash.as_str());
    let kind = match (&record.r#type, &record.scope) {
        (Some(t), Some(s)) => format!("{}({})", t, s),
        (Some(t), None) => t.clone(),
        (None, _) => "-".to_string(),
    };
    let notes = if record.is_breaking() {
        format!(" [{} breaking note(s)]", record.notes.len())
    } else {
        String::new()
    };
    format!("{} {}{} {}", short_hash, kind, notes, record.header)
}

/// Display the commits found since the latest tag.
pub fn display_commit_records(records: &[CommitRecord], latest_tag: &str) {
    println!(
        "\n{}",
        style(format!(
            "Found the following commits from the latest tag {}",
            latest_tag
        ))
        .bold()
    );
    for (i, record) in records.iter().enumerate() {
        println!("  {}. {}", i + 1, format_commit_record(record));
    }
}

/// Human readable sentence describing a verdict.
pub fn format_verdict(verdict: &Verdict) -> String {
    let latest = verdict.latest_tag.as_deref().unwrap_or("unknown");
    let expected = verdict.expected_version.as_deref().unwrap_or("unknown");
    match verdict.status {
        VerdictStatus::NotApplicable => "No version bump necessary".to_string(),
        VerdictStatus::Match => format!(
            "Current version {} matches the increment required by your commits from the latest tag {}",
            verdict.candidate_version, latest
        ),
        VerdictStatus::Mismatch => format!(
            "Current version is {}, but should be {} according to your commits from the last tag {}",
            verdict.candidate_version, expected, latest
        ),
    }
}
