//! Library-side entry points used by the command line wrapper

pub mod orchestration;

pub use orchestration::{check_version_bump, run_check_workflow, CheckWorkflowArgs, WorkflowReport};
