//! Read-only task snapshot handed to the workflow core.

use super::{KpiBucketId, TaskId, TaskPriority, TaskSize, TaskStatus};
use crate::access::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a task row as loaded by the persistence layer.
///
/// The workflow core never mutates tasks; it reads the snapshot to decide
/// whether a transition is allowed and to derive scoring projections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    id: TaskId,
    owner_id: UserId,
    assigner_id: UserId,
    status: TaskStatus,
    priority: TaskPriority,
    size: TaskSize,
    kpi_bucket_id: Option<KpiBucketId>,
    estimated_minutes: Option<u32>,
    actual_minutes: Option<u32>,
    deadline: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    on_hold_reason: Option<String>,
    rejection_reason: Option<String>,
    carry_forward_count: u32,
    original_deadline: Option<DateTime<Utc>>,
    is_carried_forward: bool,
    requires_review: bool,
}

/// Parameter object for reconstructing a persisted task snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Member who owns and works on the task.
    pub owner_id: UserId,
    /// Member who created or assigned the task.
    pub assigner_id: UserId,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted size class.
    pub size: TaskSize,
    /// KPI bucket the task contributes to, if any.
    pub kpi_bucket_id: Option<KpiBucketId>,
    /// Owner's effort estimate.
    pub estimated_minutes: Option<u32>,
    /// Effort actually logged.
    pub actual_minutes: Option<u32>,
    /// Current deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Reason recorded when the task was put on hold.
    pub on_hold_reason: Option<String>,
    /// Reason recorded when the task was last reopened.
    pub rejection_reason: Option<String>,
    /// Number of times the deadline was carried forward.
    pub carry_forward_count: u32,
    /// Deadline before the first carry forward.
    pub original_deadline: Option<DateTime<Utc>>,
    /// Whether the task has been carried forward at least once.
    pub is_carried_forward: bool,
    /// Whether completing the task passes through review.
    pub requires_review: bool,
}

impl TaskSnapshot {
    /// Creates a snapshot of a freshly created task.
    ///
    /// The task starts in [`TaskStatus::New`] with priority
    /// [`TaskPriority::P3`], size [`TaskSize::Medium`], and review enabled.
    #[must_use]
    pub fn new(owner_id: UserId, assigner_id: UserId) -> Self {
        Self {
            id: TaskId::new(),
            owner_id,
            assigner_id,
            status: TaskStatus::New,
            priority: TaskPriority::P3,
            size: TaskSize::Medium,
            kpi_bucket_id: None,
            estimated_minutes: None,
            actual_minutes: None,
            deadline: None,
            completed_at: None,
            on_hold_reason: None,
            rejection_reason: None,
            carry_forward_count: 0,
            original_deadline: None,
            is_carried_forward: false,
            requires_review: true,
        }
    }

    /// Reconstructs a snapshot from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            assigner_id: data.assigner_id,
            status: data.status,
            priority: data.priority,
            size: data.size,
            kpi_bucket_id: data.kpi_bucket_id,
            estimated_minutes: data.estimated_minutes,
            actual_minutes: data.actual_minutes,
            deadline: data.deadline,
            completed_at: data.completed_at,
            on_hold_reason: data.on_hold_reason,
            rejection_reason: data.rejection_reason,
            carry_forward_count: data.carry_forward_count,
            original_deadline: data.original_deadline,
            is_carried_forward: data.is_carried_forward,
            requires_review: data.requires_review,
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Sets the workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the size class.
    #[must_use]
    pub const fn with_size(mut self, size: TaskSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the KPI bucket.
    #[must_use]
    pub const fn with_kpi_bucket(mut self, kpi_bucket_id: KpiBucketId) -> Self {
        self.kpi_bucket_id = Some(kpi_bucket_id);
        self
    }

    /// Sets estimated and actual effort in minutes.
    #[must_use]
    pub const fn with_effort(mut self, estimated_minutes: u32, actual_minutes: u32) -> Self {
        self.estimated_minutes = Some(estimated_minutes);
        self.actual_minutes = Some(actual_minutes);
        self
    }

    /// Sets the current deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Sets the on-hold reason.
    #[must_use]
    pub fn with_on_hold_reason(mut self, reason: impl Into<String>) -> Self {
        self.on_hold_reason = Some(reason.into());
        self
    }

    /// Sets the rejection reason.
    #[must_use]
    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Records that the deadline was carried forward `count` times from
    /// `original_deadline`.
    #[must_use]
    pub const fn with_carry_forward(
        mut self,
        count: u32,
        original_deadline: DateTime<Utc>,
    ) -> Self {
        self.carry_forward_count = count;
        self.original_deadline = Some(original_deadline);
        self.is_carried_forward = count > 0;
        self
    }

    /// Sets whether completion passes through review.
    #[must_use]
    pub const fn with_requires_review(mut self, requires_review: bool) -> Self {
        self.requires_review = requires_review;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the assigner identifier.
    #[must_use]
    pub const fn assigner_id(&self) -> UserId {
        self.assigner_id
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the size class.
    #[must_use]
    pub const fn size(&self) -> TaskSize {
        self.size
    }

    /// Returns the KPI bucket, if any.
    #[must_use]
    pub const fn kpi_bucket_id(&self) -> Option<KpiBucketId> {
        self.kpi_bucket_id
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

    /// Returns the current deadline.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the on-hold reason.
    #[must_use]
    pub fn on_hold_reason(&self) -> Option<&str> {
        self.on_hold_reason.as_deref()
    }

    /// Returns the rejection reason.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// Returns how many times the deadline was carried forward.
    #[must_use]
    pub const fn carry_forward_count(&self) -> u32 {
        self.carry_forward_count
    }

    /// Returns the deadline before the first carry forward.
    #[must_use]
    pub const fn original_deadline(&self) -> Option<DateTime<Utc>> {
        self.original_deadline
    }

    /// Returns whether the task has been carried forward.
    #[must_use]
    pub const fn is_carried_forward(&self) -> bool {
        self.is_carried_forward
    }

    /// Returns whether completion passes through review.
    #[must_use]
    pub const fn requires_review(&self) -> bool {
        self.requires_review
    }
}
