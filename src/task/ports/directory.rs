//! Read-only port onto the task and organisation records the workflow
//! decisions depend on.

use crate::access::domain::{Member, UserId};
use crate::task::domain::{TaskId, TaskSnapshot};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for workflow directory operations.
pub type WorkflowDirectoryResult<T> = Result<T, WorkflowDirectoryError>;

/// Lookup contract for tasks and organisation members.
///
/// Implementations must return a consistent snapshot: the workflow core
/// trusts the facts it is handed and performs no further I/O.
#[async_trait]
pub trait WorkflowDirectory: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> WorkflowDirectoryResult<Option<TaskSnapshot>>;

    /// Finds an organisation member by identifier.
    ///
    /// Returns `None` when the member does not exist.
    async fn find_member(&self, id: UserId) -> WorkflowDirectoryResult<Option<Member>>;

    /// Returns the members who report directly to `manager_id`.
    async fn direct_reports(&self, manager_id: UserId) -> WorkflowDirectoryResult<Vec<UserId>>;
}

/// Errors returned by workflow directory implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkflowDirectoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkflowDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
