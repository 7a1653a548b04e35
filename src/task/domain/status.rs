//! Task workflow status vocabulary.

use super::{ParseTaskStatusError, transition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been created or assigned but not yet acknowledged.
    New,
    /// Owner has acknowledged the task.
    Accepted,
    /// Owner is working on the task.
    InProgress,
    /// Work is paused with a recorded reason.
    OnHold,
    /// Owner has submitted the task and it awaits review.
    CompletedPendingReview,
    /// A reviewer approved the task.
    ClosedApproved,
    /// A reviewer sent the task back for rework.
    Reopened,
}

impl TaskStatus {
    /// Every status in workflow order.
    pub const ALL: [Self; 7] = [
        Self::New,
        Self::Accepted,
        Self::InProgress,
        Self::OnHold,
        Self::CompletedPendingReview,
        Self::ClosedApproved,
        Self::Reopened,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Accepted => "ACCEPTED",
            Self::InProgress => "IN_PROGRESS",
            Self::OnHold => "ON_HOLD",
            Self::CompletedPendingReview => "COMPLETED_PENDING_REVIEW",
            Self::ClosedApproved => "CLOSED_APPROVED",
            Self::Reopened => "REOPENED",
        }
    }

    /// Returns whether the transition table has an edge to `target`.
    ///
    /// Roles and guards are not considered; use
    /// [`transition::validate_transition`] for a full decision.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        transition::find_rule(self, target).is_some()
    }

    /// Returns whether the status has no outbound transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !transition::transition_rules()
            .iter()
            .any(|rule| rule.source() == self)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "NEW" => Ok(Self::New),
            "ACCEPTED" => Ok(Self::Accepted),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "ON_HOLD" => Ok(Self::OnHold),
            "COMPLETED_PENDING_REVIEW" => Ok(Self::CompletedPendingReview),
            "CLOSED_APPROVED" => Ok(Self::ClosedApproved),
            "REOPENED" => Ok(Self::Reopened),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
