//! Main workflow orchestration logic
//!
//! Runs the check as a strictly sequential pipeline:
//! tag discovery, commit retrieval, parsing, classification, validation.
//! Every stage fails fast and nothing here logs; the caller decides what to
//! print from the returned [WorkflowReport].

use crate::analyzer::VersionAnalyzer;
use crate::config::Config;
use crate::domain::tag::{invalid_tags, latest_tag};
use crate::domain::{CommitRecord, IncrementClass, VersionTag};
use crate::error::{BumpCheckError, Result};
use crate::git::Repository;
use crate::validator::{self, Verdict};

/// Arguments for the check workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckWorkflowArgs {
    /// Version declared by the caller
    pub candidate_version: String,
}

/// Everything the pipeline learned on its way to the verdict
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowReport {
    /// Highest semver tag in the repository
    pub latest_tag: VersionTag,
    /// Tags ignored because they are not semantic versions
    pub discarded_tags: Vec<String>,
    /// Parsed commits since `latest_tag`, in repository order
    pub records: Vec<CommitRecord>,
    /// `None` when there are no commits since `latest_tag`
    pub increment: Option<IncrementClass>,
    pub verdict: Verdict,
}

/// Main check workflow
///
/// 1. Parse the candidate version
/// 2. Find the latest semver tag
/// 3. Read and parse every commit since that tag
/// 4. Classify the commits into an increment class
/// 5. Compare the expected next version with the candidate
///
/// A mismatch is reported through the verdict, not as an error; see
/// [check_version_bump] for the failing variant.
pub fn run_check_workflow<R: Repository>(
    repo: &R,
    config: &Config,
    args: &CheckWorkflowArgs,
) -> Result<WorkflowReport> {
    let candidate = validator::parse_candidate(&args.candidate_version)?;
    let analyzer = VersionAnalyzer::new(config)?;

    let tags = repo.list_tags()?;
    let latest = latest_tag(&tags).ok_or(BumpCheckError::NoTagFound)?;

    let commits = repo.commits_since(&latest.name)?;
    let records = analyzer.parse_commits(commits)?;

    let increment = analyzer.classify(&records);
    let verdict = validator::validate(&latest, increment, &candidate);

    Ok(WorkflowReport {
        latest_tag: latest,
        discarded_tags: invalid_tags(&tags),
        records,
        increment,
        verdict,
    })
}

/// Run the workflow and fail with [BumpCheckError::VersionMismatch] on a mismatch.
pub fn check_version_bump<R: Repository>(
    repo: &R,
    config: &Config,
    candidate_version: &str,
) -> Result<Verdict> {
    let args = CheckWorkflowArgs {
        candidate_version: candidate_version.to_string(),
    };
    run_check_workflow(repo, config, &args)?.verdict.into_result()
}
