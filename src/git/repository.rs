use crate::error::{BumpCheckError, Result};
use crate::git::{CommitStream, RawCommit};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository.
    ///
    /// `None` means the current working directory. Relative paths are resolved
    /// against the current working directory first.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let location = resolve_repo_path(path)?;
        let repo = Git2Repo::discover(&location).map_err(|e| {
            BumpCheckError::repository_access(format!(
                "Not a git repository '{}': {}",
                location.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Get the current HEAD hash (full 40-character SHA-1)
    pub fn head_hash(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .map_err(|e| BumpCheckError::history_read(format!("Cannot read HEAD: {}", e)))?;
        head.target()
            .map(|oid| oid.to_string())
            .ok_or_else(|| BumpCheckError::history_read("HEAD is detached or invalid"))
    }
}

/// Turn an optional repository location into an absolute path.
pub fn resolve_repo_path(path: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match path {
        None => cwd,
        Some(p) if p.as_os_str().is_empty() => cwd,
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
    })
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| BumpCheckError::repository_access(e.message().to_string()))?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commits_since(&self, reference: &str) -> Result<CommitStream<'_>> {
        let history_err = |e: git2::Error| BumpCheckError::history_read(e.message().to_string());

        let tag_commit = self
            .repo
            .find_reference(&format!("refs/tags/{}", reference))
            .and_then(|r| r.peel_to_commit())
            .map_err(|e| {
                BumpCheckError::history_read(format!(
                    "Cannot resolve tag '{}': {}",
                    reference,
                    e.message()
                ))
            })?;

        let mut revwalk = self.repo.revwalk().map_err(history_err)?;
        revwalk.push_head().map_err(history_err)?;
        revwalk.hide(tag_commit.id()).map_err(history_err)?;

        let repo = &self.repo;
        Ok(Box::new(revwalk.map(move |oid| {
            let oid = oid.map_err(history_err)?;
            let commit = repo.find_commit(oid).map_err(history_err)?;
            Ok(RawCommit::new(
                oid.to_string(),
                String::from_utf8_lossy(commit.message_bytes()),
            ))
        })))
    }
}
