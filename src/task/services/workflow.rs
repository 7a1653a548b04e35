//! Service layer that gathers workflow facts and delegates to the domain.

use crate::{
    access::domain::{Member, UserId, can_approve_task, can_view_task},
    task::{
        domain::{
            ParseTaskStatusError, TaskId, TaskSnapshot, TaskStatus, TransitionContext,
            TransitionError,
            transition::{self, TransitionRule},
        },
        ports::{WorkflowDirectory, WorkflowDirectoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for checking a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    actor_id: UserId,
    target_status: String,
    reason: Option<String>,
    on_hold_reason: Option<String>,
}

impl TransitionTaskRequest {
    /// Creates a request for `actor_id` to move `task_id` to
    /// `target_status`.
    #[must_use]
    pub fn new(task_id: TaskId, actor_id: UserId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            actor_id,
            target_status: target_status.into(),
            reason: None,
            on_hold_reason: None,
        }
    }

    /// Sets the free-text reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the on-hold reason.
    #[must_use]
    pub fn with_on_hold_reason(mut self, on_hold_reason: impl Into<String>) -> Self {
        self.on_hold_reason = Some(on_hold_reason.into());
        self
    }
}

/// Accepted transition, with the flags the caller needs to persist it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDecision {
    /// Task being moved.
    pub task_id: TaskId,
    /// Current status.
    pub from: TaskStatus,
    /// Requested status.
    pub to: TaskStatus,
    /// Whether the transition carries a reason that must be recorded.
    pub requires_reason: bool,
    /// Whether the transition is a reviewer decision.
    pub requires_manager_approval: bool,
}

/// Action a member may take on a task, for rendering buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableAction {
    /// Destination status.
    pub status: TaskStatus,
    /// Whether the UI must collect a reason first.
    pub requires_reason: bool,
}

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// The requested status string is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The workflow rejected the transition.
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The acting member does not exist.
    #[error("member not found: {0}")]
    MemberNotFound(UserId),
    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] WorkflowDirectoryError),
}

/// Result type for workflow service operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Workflow decision service.
///
/// Loads the task, the acting member, and the member's direct reports from
/// the directory, then hands a consistent snapshot to the pure domain rules.
#[derive(Clone)]
pub struct TaskWorkflowService<D>
where
    D: WorkflowDirectory,
{
    directory: Arc<D>,
}

impl<D> TaskWorkflowService<D>
where
    D: WorkflowDirectory,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Decides whether the requested transition is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::InvalidStatus`] for unknown target
    /// statuses, [`TaskWorkflowError::TaskNotFound`] or
    /// [`TaskWorkflowError::MemberNotFound`] for missing records,
    /// [`TaskWorkflowError::Transition`] when the workflow rejects the
    /// request, and [`TaskWorkflowError::Directory`] on lookup failure.
    pub async fn check_transition(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskWorkflowResult<TransitionDecision> {
        let target = TaskStatus::try_from(request.target_status.as_str())?;
        let task = self.load_task(request.task_id).await?;
        let actor = self.load_member(request.actor_id).await?;
        let mut context = self.context_for(&task, &actor).await?;
        if let Some(reason) = request.reason {
            context = context.with_reason(reason);
        }
        if let Some(on_hold_reason) = request.on_hold_reason {
            context = context.with_on_hold_reason(on_hold_reason);
        }

        let from = task.status();
        if let Err(err) = transition::validate_transition(from, target, &context) {
            info!(
                task_id = %task.id(),
                actor_id = %actor.id(),
                %from,
                to = %target,
                kind = ?err.kind(),
                "transition rejected"
            );
            return Err(err.into());
        }

        debug!(task_id = %task.id(), actor_id = %actor.id(), %from, to = %target, "transition allowed");
        Ok(TransitionDecision {
            task_id: task.id(),
            from,
            to: target,
            requires_reason: transition::transition_requires_reason(from, target),
            requires_manager_approval: transition::transition_requires_manager_approval(
                from, target,
            ),
        })
    }

    /// Lists the actions `actor_id` may take on the task.
    ///
    /// Actions blocked only by a missing reason are included with
    /// `requires_reason` set, so the caller can prompt for it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::TaskNotFound`] or
    /// [`TaskWorkflowError::MemberNotFound`] for missing records and
    /// [`TaskWorkflowError::Directory`] on lookup failure.
    pub async fn available_actions(
        &self,
        task_id: TaskId,
        actor_id: UserId,
    ) -> TaskWorkflowResult<Vec<AvailableAction>> {
        let task = self.load_task(task_id).await?;
        let actor = self.load_member(actor_id).await?;
        let context = self.context_for(&task, &actor).await?;

        let actions = transition::transition_rules()
            .iter()
            .filter(|rule| rule.source() == task.status())
            .filter(|rule| is_offered(rule, &context))
            .map(|rule| AvailableAction {
                status: rule.target(),
                requires_reason: rule.requires_reason(),
            })
            .collect();
        Ok(actions)
    }

    /// Returns whether `viewer_id` may see the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::TaskNotFound`] or
    /// [`TaskWorkflowError::MemberNotFound`] for missing records and
    /// [`TaskWorkflowError::Directory`] on lookup failure.
    pub async fn can_view(&self, task_id: TaskId, viewer_id: UserId) -> TaskWorkflowResult<bool> {
        let task = self.load_task(task_id).await?;
        let viewer = self.load_member(viewer_id).await?;
        let reports = self.directory.direct_reports(viewer.id()).await?;
        Ok(can_view_task(
            viewer.role(),
            viewer.id(),
            task.owner_id(),
            &reports,
        ))
    }

    /// Returns whether `approver_id` may approve or reopen the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::TaskNotFound`] or
    /// [`TaskWorkflowError::MemberNotFound`] for missing records and
    /// [`TaskWorkflowError::Directory`] on lookup failure.
    pub async fn can_approve(
        &self,
        task_id: TaskId,
        approver_id: UserId,
    ) -> TaskWorkflowResult<bool> {
        let task = self.load_task(task_id).await?;
        let approver = self.load_member(approver_id).await?;
        let reports = self.directory.direct_reports(approver.id()).await?;
        Ok(can_approve_task(
            approver.role(),
            approver.id(),
            task.owner_id(),
            &reports,
        ))
    }

    async fn context_for(
        &self,
        task: &TaskSnapshot,
        actor: &Member,
    ) -> TaskWorkflowResult<TransitionContext> {
        let reports = self.directory.direct_reports(actor.id()).await?;
        let is_manager = reports.contains(&task.owner_id());
        Ok(
            TransitionContext::new(task.owner_id(), actor.id(), actor.role())
                .with_direct_manager(is_manager),
        )
    }

    async fn load_task(&self, task_id: TaskId) -> TaskWorkflowResult<TaskSnapshot> {
        match self.directory.find_task(task_id).await {
            Ok(Some(task)) => Ok(task),
            Ok(None) => Err(TaskWorkflowError::TaskNotFound(task_id)),
            Err(err) => {
                warn!(%task_id, error = %err, "task lookup failed");
                Err(err.into())
            }
        }
    }

    async fn load_member(&self, member_id: UserId) -> TaskWorkflowResult<Member> {
        match self.directory.find_member(member_id).await {
            Ok(Some(member)) => Ok(member),
            Ok(None) => Err(TaskWorkflowError::MemberNotFound(member_id)),
            Err(err) => {
                warn!(%member_id, error = %err, "member lookup failed");
                Err(err.into())
            }
        }
    }
}

fn is_offered(rule: &TransitionRule, context: &TransitionContext) -> bool {
    match rule.check(context) {
        Ok(()) | Err(TransitionError::ReasonTooShort { .. }) => true,
        Err(_) => false,
    }
}
