//! Authoritative task status transition table.
//!
//! Each edge of the workflow is one immutable [`TransitionRule`] record
//! holding the status pair, the roles that may request it, two static flags,
//! and an optional guard evaluated against a [`TransitionContext`]. Lookups
//! are by exact `(from, to)` pair; no pair appears twice.
//!
//! ```text
//! NEW --(owner)--> ACCEPTED --(owner)--> IN_PROGRESS
//! NEW --(owner)--> IN_PROGRESS
//! IN_PROGRESS --(owner, reason)--> ON_HOLD --(owner)--> IN_PROGRESS
//! IN_PROGRESS --(owner)--> COMPLETED_PENDING_REVIEW
//! COMPLETED_PENDING_REVIEW --(reviewer)--> CLOSED_APPROVED
//! COMPLETED_PENDING_REVIEW --(reviewer, reason)--> REOPENED
//! REOPENED --(owner)--> IN_PROGRESS
//! ```

use super::{TaskStatus, TransitionError};
use crate::access::domain::{Role, UserId};

/// Minimum trimmed length, in characters, of a mandatory reason.
pub const MIN_REASON_LENGTH: usize = 10;

/// Guard evaluated after the role check passes.
pub type TransitionGuard = fn(&TransitionRule, &TransitionContext) -> Result<(), TransitionError>;

const ANY_ROLE: &[Role] = &Role::ALL;
const REVIEWER_ROLES: &[Role] = &[Role::Manager, Role::DepartmentHead, Role::Admin];

/// Facts about a single transition attempt.
///
/// Built fresh for every request and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionContext {
    task_owner_id: UserId,
    current_user_id: UserId,
    current_user_role: Role,
    is_manager: bool,
    reason: Option<String>,
    on_hold_reason: Option<String>,
}

impl TransitionContext {
    /// Creates a context for `current_user_id` acting on a task owned by
    /// `task_owner_id`.
    #[must_use]
    pub const fn new(task_owner_id: UserId, current_user_id: UserId, current_user_role: Role) -> Self {
        Self {
            task_owner_id,
            current_user_id,
            current_user_role,
            is_manager: false,
            reason: None,
            on_hold_reason: None,
        }
    }

    /// Records whether the requester is the owner's direct manager.
    #[must_use]
    pub const fn with_direct_manager(mut self, is_manager: bool) -> Self {
        self.is_manager = is_manager;
        self
    }

    /// Sets the free-text reason supplied with the request.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the on-hold reason supplied with the request.
    #[must_use]
    pub fn with_on_hold_reason(mut self, on_hold_reason: impl Into<String>) -> Self {
        self.on_hold_reason = Some(on_hold_reason.into());
        self
    }

    /// Returns the task owner.
    #[must_use]
    pub const fn task_owner_id(&self) -> UserId {
        self.task_owner_id
    }

    /// Returns the requester.
    #[must_use]
    pub const fn current_user_id(&self) -> UserId {
        self.current_user_id
    }

    /// Returns the requester's role.
    #[must_use]
    pub const fn current_user_role(&self) -> Role {
        self.current_user_role
    }

    /// Returns whether the requester is the owner's direct manager.
    #[must_use]
    pub const fn is_manager(&self) -> bool {
        self.is_manager
    }

    /// Returns the supplied reason.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the supplied on-hold reason.
    #[must_use]
    pub fn on_hold_reason(&self) -> Option<&str> {
        self.on_hold_reason.as_deref()
    }

    fn is_owner(&self) -> bool {
        self.current_user_id == self.task_owner_id
    }
}

/// One directed edge of the workflow.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRule {
    from: TaskStatus,
    to: TaskStatus,
    action: &'static str,
    allowed_roles: &'static [Role],
    requires_reason: bool,
    requires_manager_approval: bool,
    guard: Option<TransitionGuard>,
}

impl TransitionRule {
    /// Returns the source status.
    #[must_use]
    pub const fn source(&self) -> TaskStatus {
        self.from
    }

    /// Returns the destination status.
    #[must_use]
    pub const fn target(&self) -> TaskStatus {
        self.to
    }

    /// Returns the human-readable action, e.g. `accept this task`.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        self.action
    }

    /// Returns the roles allowed to request this transition.
    #[must_use]
    pub const fn allowed_roles(&self) -> &'static [Role] {
        self.allowed_roles
    }

    /// Returns whether the transition needs a textual reason.
    #[must_use]
    pub const fn requires_reason(&self) -> bool {
        self.requires_reason
    }

    /// Returns whether the transition is a reviewer decision.
    #[must_use]
    pub const fn requires_manager_approval(&self) -> bool {
        self.requires_manager_approval
    }

    /// Returns whether `role` may request this transition.
    #[must_use]
    pub fn allows_role(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Runs the role check and guard against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::RoleNotPermitted`] when the requester's
    /// role is excluded, or the guard's error when the guard rejects the
    /// request.
    pub fn check(&self, context: &TransitionContext) -> Result<(), TransitionError> {
        let role = context.current_user_role();
        if !self.allows_role(role) {
            return Err(TransitionError::RoleNotPermitted {
                role,
                from: self.from,
                to: self.to,
            });
        }
        self.guard.map_or(Ok(()), |guard| guard(self, context))
    }
}

const fn owner_rule(from: TaskStatus, to: TaskStatus, action: &'static str) -> TransitionRule {
    TransitionRule {
        from,
        to,
        action,
        allowed_roles: ANY_ROLE,
        requires_reason: false,
        requires_manager_approval: false,
        guard: Some(require_owner),
    }
}

static TRANSITION_RULES: [TransitionRule; 9] = [
    owner_rule(TaskStatus::New, TaskStatus::Accepted, "accept this task"),
    owner_rule(TaskStatus::New, TaskStatus::InProgress, "start this task"),
    owner_rule(TaskStatus::Accepted, TaskStatus::InProgress, "start this task"),
    TransitionRule {
        from: TaskStatus::InProgress,
        to: TaskStatus::OnHold,
        action: "put this task on hold",
        allowed_roles: ANY_ROLE,
        requires_reason: true,
        requires_manager_approval: false,
        guard: Some(require_owner_with_hold_reason),
    },
    owner_rule(
        TaskStatus::InProgress,
        TaskStatus::CompletedPendingReview,
        "submit this task for review",
    ),
    owner_rule(TaskStatus::OnHold, TaskStatus::InProgress, "resume this task"),
    TransitionRule {
        from: TaskStatus::CompletedPendingReview,
        to: TaskStatus::ClosedApproved,
        action: "approve",
        allowed_roles: REVIEWER_ROLES,
        requires_reason: false,
        requires_manager_approval: true,
        guard: Some(require_reviewer),
    },
    TransitionRule {
        from: TaskStatus::CompletedPendingReview,
        to: TaskStatus::Reopened,
        action: "reopen",
        allowed_roles: REVIEWER_ROLES,
        requires_reason: true,
        requires_manager_approval: true,
        guard: Some(require_reviewer_with_reason),
    },
    owner_rule(TaskStatus::Reopened, TaskStatus::InProgress, "restart this task"),
];

fn require_owner(rule: &TransitionRule, context: &TransitionContext) -> Result<(), TransitionError> {
    if context.is_owner() {
        Ok(())
    } else {
        Err(TransitionError::NotTaskOwner {
            action: rule.action(),
        })
    }
}

fn require_owner_with_hold_reason(
    rule: &TransitionRule,
    context: &TransitionContext,
) -> Result<(), TransitionError> {
    require_owner(rule, context)?;
    require_min_length("on-hold reason", context.on_hold_reason())
}

fn require_reviewer(rule: &TransitionRule, context: &TransitionContext) -> Result<(), TransitionError> {
    if context.is_owner() {
        return Err(TransitionError::SelfReviewForbidden {
            action: rule.action(),
        });
    }
    // Department heads and admins review outside their direct reports.
    if context.current_user_role() == Role::Manager && !context.is_manager() {
        return Err(TransitionError::OutsideManagerScope {
            action: rule.action(),
        });
    }
    Ok(())
}

fn require_reviewer_with_reason(
    rule: &TransitionRule,
    context: &TransitionContext,
) -> Result<(), TransitionError> {
    require_reviewer(rule, context)?;
    require_min_length("reason", context.reason())
}

fn require_min_length(field: &'static str, value: Option<&str>) -> Result<(), TransitionError> {
    let actual = value.map_or(0, |text| text.trim().chars().count());
    if actual < MIN_REASON_LENGTH {
        return Err(TransitionError::ReasonTooShort {
            field,
            minimum: MIN_REASON_LENGTH,
            actual,
        });
    }
    Ok(())
}

/// Returns every rule in the table, in declaration order.
#[must_use]
pub fn transition_rules() -> &'static [TransitionRule] {
    &TRANSITION_RULES
}

/// Looks up the rule for the exact `(from, to)` pair.
#[must_use]
pub fn find_rule(from: TaskStatus, to: TaskStatus) -> Option<&'static TransitionRule> {
    TRANSITION_RULES
        .iter()
        .find(|rule| rule.from == from && rule.to == to)
}

/// Decides whether a task may move from `from` to `to`.
///
/// # Errors
///
/// Returns [`TransitionError::NoSuchTransition`] when the table has no such
/// edge, [`TransitionError::RoleNotPermitted`] when the requester's role is
/// excluded, or the guard's error otherwise.
///
/// # Examples
///
/// ```
/// use taskboard::access::domain::{Role, UserId};
/// use taskboard::task::domain::{TaskStatus, TransitionContext};
/// use taskboard::task::domain::transition::validate_transition;
///
/// let owner = UserId::new();
/// let context = TransitionContext::new(owner, owner, Role::Employee)
///     .with_on_hold_reason("Waiting for client feedback");
///
/// assert!(validate_transition(TaskStatus::InProgress, TaskStatus::OnHold, &context).is_ok());
/// ```
pub fn validate_transition(
    from: TaskStatus,
    to: TaskStatus,
    context: &TransitionContext,
) -> Result<(), TransitionError> {
    let rule = find_rule(from, to).ok_or(TransitionError::NoSuchTransition { from, to })?;
    rule.check(context)
}

/// Returns the destinations reachable from `from` for this context.
#[must_use]
pub fn valid_transitions(from: TaskStatus, context: &TransitionContext) -> Vec<TaskStatus> {
    TRANSITION_RULES
        .iter()
        .filter(|rule| rule.from == from && rule.check(context).is_ok())
        .map(TransitionRule::target)
        .collect()
}

/// Returns whether the `(from, to)` transition needs a reason.
///
/// Unknown pairs return `false`.
#[must_use]
pub fn transition_requires_reason(from: TaskStatus, to: TaskStatus) -> bool {
    find_rule(from, to).is_some_and(TransitionRule::requires_reason)
}

/// Returns whether the `(from, to)` transition is a reviewer decision.
///
/// Unknown pairs return `false`.
#[must_use]
pub fn transition_requires_manager_approval(from: TaskStatus, to: TaskStatus) -> bool {
    find_rule(from, to).is_some_and(TransitionRule::requires_manager_approval)
}
