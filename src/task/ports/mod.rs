//! Port contracts for the task workflow.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

mod directory;

pub use directory::{WorkflowDirectory, WorkflowDirectoryError, WorkflowDirectoryResult};
