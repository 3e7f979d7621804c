//! Expected-version computation and comparison against a candidate version.

use semver::{BuildMetadata, Version};
use serde::Serialize;
use std::fmt;

use crate::domain::{parse_version, IncrementClass, VersionTag};
use crate::error::{BumpCheckError, Result};

/// Outcome of a version check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictStatus {
    /// No commits since the latest tag; nothing was checked
    NotApplicable,
    /// The candidate is the expected next version
    Match,
    /// The candidate differs from the expected next version
    Mismatch,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerdictStatus::NotApplicable => "not applicable",
            VerdictStatus::Match => "match",
            VerdictStatus::Mismatch => "mismatch",
        };
        f.write_str(s)
    }
}

/// Verdict handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub candidate_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increment_class: Option<IncrementClass>,
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        self.status != VerdictStatus::Mismatch
    }

    /// Turn a mismatch into [BumpCheckError::VersionMismatch]
    pub fn into_result(self) -> Result<Verdict> {
        if self.status == VerdictStatus::Mismatch {
            if let (Some(expected), Some(latest_tag)) =
                (self.expected_version.clone(), self.latest_tag.clone())
            {
                return Err(BumpCheckError::VersionMismatch {
                    candidate: self.candidate_version,
                    expected,
                    latest_tag,
                });
            }
        }
        Ok(self)
    }
}

/// Parse the caller-supplied version.
pub fn parse_candidate(candidate: &str) -> Result<Version> {
    parse_version(candidate).ok_or_else(|| {
        BumpCheckError::invalid_version(format!(
            "'{}' is not a valid semantic version",
            candidate
        ))
    })
}

/// The version `latest` becomes once `increment` is applied
pub fn expected_version(latest: &VersionTag, increment: IncrementClass) -> Version {
    increment.apply(&latest.version)
}

/// Compare `candidate` with the version implied by `latest` and `increment`.
///
/// Build metadata on the candidate is ignored. `increment == None` means no commits were found and yields
/// [VerdictStatus::NotApplicable] whatever the candidate is.
pub fn validate(
    latest: &VersionTag,
    increment: Option<IncrementClass>,
    candidate: &Version,
) -> Verdict {
    let Some(increment) = increment else {
        return Verdict {
            status: VerdictStatus::NotApplicable,
            candidate_version: candidate.to_string(),
            expected_version: None,
            latest_tag: Some(latest.name.clone()),
            increment_class: None,
        };
    };

    let expected = expected_version(latest, increment);
    let canonical = Version {
        build: BuildMetadata::EMPTY,
        ..candidate.clone()
    };
    let status = if expected == canonical {
        VerdictStatus::Match
    } else {
        VerdictStatus::Mismatch
    };

    Verdict {
        status,
        candidate_version: candidate.to_string(),
        expected_version: Some(expected.to_string()),
        latest_tag: Some(latest.name.clone()),
        increment_class: Some(increment),
    }
}
