//! Scoring projection of a task.

use crate::task::domain::{KpiBucketId, TaskId, TaskPriority, TaskSize, TaskSnapshot, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The subset of a task the scoring engine reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTask {
    id: TaskId,
    status: TaskStatus,
    size: TaskSize,
    priority: TaskPriority,
    completed_at: Option<DateTime<Utc>>,
    deadline: Option<DateTime<Utc>>,
    estimated_minutes: Option<u32>,
    actual_minutes: Option<u32>,
    requires_review: bool,
    kpi_bucket_id: Option<KpiBucketId>,
    carry_forward_count: u32,
}

impl From<&TaskSnapshot> for ScoredTask {
    fn from(task: &TaskSnapshot) -> Self {
        Self {
            id: task.id(),
            status: task.status(),
            size: task.size(),
            priority: task.priority(),
            completed_at: task.completed_at(),
            deadline: task.deadline(),
            estimated_minutes: task.estimated_minutes(),
            actual_minutes: task.actual_minutes(),
            requires_review: task.requires_review(),
            kpi_bucket_id: task.kpi_bucket_id(),
            carry_forward_count: task.carry_forward_count(),
        }
    }
}

impl ScoredTask {
    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the size class.
    #[must_use]
    pub const fn size(&self) -> TaskSize {
        self.size
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the recorded completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the current deadline.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the effort estimate in minutes.
    #[must_use]
    pub const fn estimated_minutes(&self) -> Option<u32> {
        self.estimated_minutes
    }

    /// Returns the logged effort in minutes.
    #[must_use]
    pub const fn actual_minutes(&self) -> Option<u32> {
        self.actual_minutes
    }

    /// Returns whether completion passes through review.
    #[must_use]
    pub const fn requires_review(&self) -> bool {
        self.requires_review
    }

    /// Returns the KPI bucket, if any.
    #[must_use]
    pub const fn kpi_bucket_id(&self) -> Option<KpiBucketId> {
        self.kpi_bucket_id
    }

    /// Returns how many times the deadline was carried forward.
    #[must_use]
    pub const fn carry_forward_count(&self) -> u32 {
        self.carry_forward_count
    }
}
