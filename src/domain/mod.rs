//! Domain logic - pure business rules independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::{CommitParser, CommitRecord, Note};
pub use tag::{latest_tag, parse_version, VersionTag};
pub use version::IncrementClass;
