use thiserror::Error;

/// Unified error type for bump-check operations
#[derive(Error, Debug)]
pub enum BumpCheckError {
    #[error("Error getting Git tags: {0}")]
    RepositoryAccess(String),

    #[error("Could not find the latest git tag")]
    NoTagFound,

    #[error("Failed to read commit history: {0}")]
    HistoryRead(String),

    #[error("Current version is {candidate}, but should be {expected} according to your commits from the last tag {latest_tag}")]
    VersionMismatch {
        candidate: String,
        expected: String,
        latest_tag: String,
    },

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-check
pub type Result<T> = std::result::Result<T, BumpCheckError>;

impl BumpCheckError {
    /// Create a repository access error with context
    pub fn repository_access(msg: impl Into<String>) -> Self {
        BumpCheckError::RepositoryAccess(msg.into())
    }

    /// Create a history read error with context
    pub fn history_read(msg: impl Into<String>) -> Self {
        BumpCheckError::HistoryRead(msg.into())
    }

    /// Create an invalid version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        BumpCheckError::InvalidVersion(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpCheckError::Config(msg.into())
    }

    /// True for the business-logic failure, false for system faults
    pub fn is_mismatch(&self) -> bool {
        matches!(self, BumpCheckError::VersionMismatch { .. })
    }
}
