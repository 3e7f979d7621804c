use std::fmt;

/// Non-fatal observations made around the edges of the commit range.
/// They never change the verdict; the wrapper reports them in verbose mode.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// Tags skipped because they are not semantic versions
    DiscardedTags { tags: Vec<String> },
    /// Commits whose header does not follow the conventional grammar
    NonConventionalCommits { count: usize, total: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = current_commit_hash
                    .get(..7)
                    .unwrap_or(current_commit_hash.as_str());
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
            BoundaryWarning::DiscardedTags { tags } => {
                write!(
                    f,
                    "Ignored {} tag(s) that are not semantic versions: {}",
                    tags.len(),
                    tags.join(", ")
                )
            }
            BoundaryWarning::NonConventionalCommits { count, total } => {
                write!(
                    f,
                    "{} of {} commit(s) do not follow the conventional format and count as patch-level",
                    count, total
                )
            }
        }
    }
}
