use crate::error::{BumpCheckError, Result};
use crate::git::{CommitStream, RawCommit, Repository};
use std::collections::HashMap;

/// Mock repository for testing without actual git operations.
///
/// Commits are kept in a linear history, newest last. A tag marks the length of
/// the history at the moment it was added.
pub struct MockRepository {
    commits: Vec<RawCommit>,
    tags: HashMap<String, usize>,
    tag_listing_error: Option<String>,
    history_error_after: Option<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
            tag_listing_error: None,
            history_error_after: None,
        }
    }

    /// Append a commit on top of the history
    pub fn add_commit(&mut self, message: impl Into<String>) -> &mut Self {
        let hash = format!("{:040x}", self.commits.len() + 1);
        self.commits.push(RawCommit::new(hash, message));
        self
    }

    /// Tag the current tip of the history
    pub fn add_tag(&mut self, name: impl Into<String>) -> &mut Self {
        self.tags.insert(name.into(), self.commits.len());
        self
    }

    /// Make `list_tags` fail with the given message
    pub fn fail_tag_listing(&mut self, message: impl Into<String>) -> &mut Self {
        self.tag_listing_error = Some(message.into());
        self
    }

    /// Make the commit stream fail after yielding `count` commits
    pub fn fail_history_after(&mut self, count: usize) -> &mut Self {
        self.history_error_after = Some(count);
        self
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if let Some(message) = &self.tag_listing_error {
            return Err(BumpCheckError::repository_access(message.clone()));
        }
        let mut tags: Vec<String> = self.tags.keys().cloned().collect();
        tags.sort();
        Ok(tags)
    }

    fn commits_since(&self, reference: &str) -> Result<CommitStream<'_>> {
        let start = *self.tags.get(reference).ok_or_else(|| {
            BumpCheckError::history_read(format!("Cannot resolve tag '{}'", reference))
        })?;
        let fail_after = self.history_error_after;

        // Newest first, like a revwalk from HEAD.
        let stream = self.commits[start..]
            .iter()
            .rev()
            .enumerate()
            .map(move |(i, commit)| match fail_after {
                Some(limit) if i >= limit => {
                    Err(BumpCheckError::history_read("simulated read failure"))
                }
                _ => Ok(commit.clone()),
            });

        Ok(Box::new(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_list_tags() {
        let mut repo = MockRepository::new();
        repo.add_commit("initial").add_tag("1.0.0");
        repo.add_commit("feat: more").add_tag("v2.0.0");

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags, vec!["1.0.0".to_string(), "v2.0.0".to_string()]);
    }

    #[test]
    fn test_mock_repository_commits_since_tag() {
        let mut repo = MockRepository::new();
        repo.add_commit("initial").add_tag("1.0.0");
        repo.add_commit("fix: one").add_commit("feat: two");

        let messages: Vec<String> = repo
            .commits_since("1.0.0")
            .unwrap()
            .map(|c| c.unwrap().message)
            .collect();
        assert_eq!(messages, vec!["feat: two", "fix: one"]);
    }

    #[test]
    fn test_mock_repository_unknown_reference() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.commits_since("1.0.0"),
            Err(BumpCheckError::HistoryRead(_))
        ));
    }

    #[test]
    fn test_mock_repository_injected_failures() {
        let mut repo = MockRepository::new();
        repo.add_commit("initial").add_tag("1.0.0");
        repo.add_commit("fix: one").add_commit("fix: two");
        repo.fail_history_after(1).fail_tag_listing("no git");

        assert!(matches!(
            repo.list_tags(),
            Err(BumpCheckError::RepositoryAccess(_))
        ));
        let items: Vec<_> = repo.commits_since("1.0.0").unwrap().collect();
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
    }
}
