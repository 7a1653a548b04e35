//! Error types for task workflow decisions and parsing.

use super::TaskStatus;
use crate::access::domain::Role;
use thiserror::Error;

/// Reasons a requested status transition is rejected.
///
/// Rejections are ordinary business outcomes, returned as values so that
/// callers can translate them into user-facing responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The transition table has no edge between the two statuses.
    #[error("invalid transition: {from} -> {to}")]
    NoSuchTransition {
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// The edge exists but the requester's role may not use it.
    #[error("role {role} is not permitted to move a task from {from} to {to}")]
    RoleNotPermitted {
        /// Requester role.
        role: Role,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// Only the task owner may perform the action.
    #[error("only the task owner can {action}")]
    NotTaskOwner {
        /// Human-readable action, e.g. `accept this task`.
        action: &'static str,
    },

    /// Owners may not review their own work.
    #[error("you cannot {action} your own task")]
    SelfReviewForbidden {
        /// Human-readable review action.
        action: &'static str,
    },

    /// A manager attempted to review a task owned by someone outside their
    /// direct reports.
    #[error("only the owner's direct manager can {action}")]
    OutsideManagerScope {
        /// Human-readable review action.
        action: &'static str,
    },

    /// A mandatory reason is missing or shorter than the minimum.
    #[error("{field} must be at least {minimum} characters (got {actual})")]
    ReasonTooShort {
        /// Name of the reason field.
        field: &'static str,
        /// Minimum trimmed length.
        minimum: usize,
        /// Trimmed length supplied.
        actual: usize,
    },
}

/// Flat category of a [`TransitionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionErrorKind {
    /// No rule exists for the status pair.
    InvalidTransition,
    /// The requester's role is excluded by the rule.
    RoleNotPermitted,
    /// The requester is not the task owner.
    NotOwner,
    /// The requester tried to review their own task.
    SelfActionForbidden,
    /// The requester lacks hierarchical scope over the owner.
    InsufficientScope,
    /// A required reason was too short.
    ReasonTooShort,
}

impl TransitionError {
    /// Returns the category of this rejection.
    #[must_use]
    pub const fn kind(&self) -> TransitionErrorKind {
        match self {
            Self::NoSuchTransition { .. } => TransitionErrorKind::InvalidTransition,
            Self::RoleNotPermitted { .. } => TransitionErrorKind::RoleNotPermitted,
            Self::NotTaskOwner { .. } => TransitionErrorKind::NotOwner,
            Self::SelfReviewForbidden { .. } => TransitionErrorKind::SelfActionForbidden,
            Self::OutsideManagerScope { .. } => TransitionErrorKind::InsufficientScope,
            Self::ReasonTooShort { .. } => TransitionErrorKind::ReasonTooShort,
        }
    }

    /// Returns whether a different request could succeed on the same edge.
    ///
    /// Missing edges and excluded roles can never succeed; guard failures
    /// can, given a longer reason or a different requester.
    #[must_use]
    pub const fn is_retryable_with_changes(&self) -> bool {
        !matches!(
            self,
            Self::NoSuchTransition { .. } | Self::RoleNotPermitted { .. }
        )
    }
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing task sizes from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task size: {0}")]
pub struct ParseTaskSizeError(pub String);

/// Error returned while parsing Kanban columns.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown board column: {0}")]
pub struct ParseKanbanColumnError(pub String);
