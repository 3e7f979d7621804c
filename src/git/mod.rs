//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only repository
//! queries bump-check needs, allowing for a real Git implementation and an
//! in-memory one for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use bump_check::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> bump_check::Result<()> {
//! let tags = repo.list_tags()?;
//! if let Some(tag) = tags.first() {
//!     for commit in repo.commits_since(tag)? {
//!         println!("{}", commit?.message);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// One commit's full message as read from the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    /// The full commit hash
    pub hash: String,
    /// The full commit message (header, body and trailers)
    pub message: String,
}

impl RawCommit {
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        RawCommit {
            hash: hash.into(),
            message: message.into(),
        }
    }
}

/// Lazy, single-pass sequence of commits.
///
/// An `Err` item means the read failed part way; whatever was yielded before it
/// must be discarded by the consumer.
pub type CommitStream<'a> = Box<dyn Iterator<Item = Result<RawCommit>> + 'a>;

/// Read-only repository query surface.
///
/// ## Error Handling
///
/// Implementations map tag listing failures to
/// [crate::error::BumpCheckError::RepositoryAccess] and commit retrieval failures to
/// [crate::error::BumpCheckError::HistoryRead].
pub trait Repository {
    /// Get all tag names in the repository, valid semver or not.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names in no particular order
    /// * `Err` - If the tag listing cannot be performed
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Stream commits reachable from HEAD but not from `reference`.
    ///
    /// The reference is a tag name previously returned by [Repository::list_tags].
    /// The range is open at the tag and closed at HEAD.
    ///
    /// # Returns
    /// * `Ok(CommitStream)` - Lazy commit sequence in the repository's native order
    /// * `Err` - If the walk cannot be started (unknown reference, no HEAD)
    fn commits_since(&self, reference: &str) -> Result<CommitStream<'_>>;
}
