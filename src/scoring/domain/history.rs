//! Status history records consumed by the scoring engine.

use crate::task::domain::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a task's append-only status history.
///
/// A missing `from_status` marks the creation of the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransition {
    task_id: TaskId,
    from_status: Option<TaskStatus>,
    to_status: TaskStatus,
    created_at: DateTime<Utc>,
    reason: Option<String>,
}

impl StatusTransition {
    /// Creates a history entry.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        from_status: Option<TaskStatus>,
        to_status: TaskStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            task_id,
            from_status,
            to_status,
            created_at,
            reason: None,
        }
    }

    /// Creates the entry recording a task's creation.
    #[must_use]
    pub const fn created(task_id: TaskId, created_at: DateTime<Utc>) -> Self {
        Self::new(task_id, None, TaskStatus::New, created_at)
    }

    /// Sets the recorded reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns the task this entry belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the previous status, or `None` for creation.
    #[must_use]
    pub const fn previous_status(&self) -> Option<TaskStatus> {
        self.from_status
    }

    /// Returns the new status.
    #[must_use]
    pub const fn to_status(&self) -> TaskStatus {
        self.to_status
    }

    /// Returns when the transition happened.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the recorded reason.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns whether this entry records task creation.
    #[must_use]
    pub const fn is_creation(&self) -> bool {
        self.from_status.is_none()
    }
}
