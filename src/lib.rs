pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod validator;

pub use cli::{check_version_bump, run_check_workflow};
pub use error::{BumpCheckError, Result};
