//! In-memory integration tests for transition decisions over a task's life.

use super::helpers::{Org, apply, create_task, org};
use rstest::rstest;
use taskboard::task::{
    domain::{TaskSnapshot, TaskStatus, TransitionError, TransitionErrorKind},
    services::{AvailableAction, TaskWorkflowError, TransitionTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_travels_from_new_to_approved_via_rework(
    org: Result<Org, eyre::Report>,
) -> Result<(), eyre::Report> {
    let org = org?;
    let created = create_task(&org, TaskSnapshot::new(org.employee, org.manager), 3)?;
    let id = created.id();

    let (started, _) = apply(
        &org,
        created,
        TransitionTaskRequest::new(id, org.employee, "IN_PROGRESS"),
        3,
    )
    .await?;
    let (submitted, _) = apply(
        &org,
        started,
        TransitionTaskRequest::new(id, org.employee, "COMPLETED_PENDING_REVIEW"),
        4,
    )
    .await?;
    let (reopened, reopen_decision) = apply(
        &org,
        submitted,
        TransitionTaskRequest::new(id, org.manager, "REOPENED")
            .with_reason("Totals do not reconcile with the ledger"),
        4,
    )
    .await?;
    eyre::ensure!(reopen_decision.requires_reason);
    eyre::ensure!(reopen_decision.requires_manager_approval);

    let (restarted, _) = apply(
        &org,
        reopened,
        TransitionTaskRequest::new(id, org.employee, "IN_PROGRESS"),
        5,
    )
    .await?;
    let (resubmitted, _) = apply(
        &org,
        restarted,
        TransitionTaskRequest::new(id, org.employee, "COMPLETED_PENDING_REVIEW"),
        5,
    )
    .await?;
    let (approved, _) = apply(
        &org,
        resubmitted,
        TransitionTaskRequest::new(id, org.head, "CLOSED_APPROVED"),
        6,
    )
    .await?;

    eyre::ensure!(approved.status() == TaskStatus::ClosedApproved);
    eyre::ensure!(approved.completed_at().is_some());
    let remaining = org.workflow.available_actions(id, org.employee).await?;
    eyre::ensure!(remaining.is_empty(), "approved task offers {remaining:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bystander_manager_cannot_review(
    org: Result<Org, eyre::Report>,
) -> Result<(), eyre::Report> {
    let org = org?;
    let task = create_task(
        &org,
        TaskSnapshot::new(org.employee, org.manager)
            .with_status(TaskStatus::CompletedPendingReview),
        3,
    )?;

    let result = org
        .workflow
        .check_transition(TransitionTaskRequest::new(
            task.id(),
            org.other_manager,
            "CLOSED_APPROVED",
        ))
        .await;

    let Err(TaskWorkflowError::Transition(err)) = &result else {
        return Err(eyre::eyre!("expected a transition rejection, got {result:?}"));
    };
    eyre::ensure!(err.kind() == TransitionErrorKind::InsufficientScope);
    eyre::ensure!(!org.workflow.can_approve(task.id(), org.other_manager).await?);
    eyre::ensure!(org.workflow.can_approve(task.id(), org.manager).await?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_sees_hold_action_pending_reason(
    org: Result<Org, eyre::Report>,
) -> Result<(), eyre::Report> {
    let org = org?;
    let task = create_task(
        &org,
        TaskSnapshot::new(org.employee, org.manager).with_status(TaskStatus::InProgress),
        3,
    )?;

    let actions = org.workflow.available_actions(task.id(), org.employee).await?;

    eyre::ensure!(
        actions
            == vec![
                AvailableAction {
                    status: TaskStatus::OnHold,
                    requires_reason: true,
                },
                AvailableAction {
                    status: TaskStatus::CompletedPendingReview,
                    requires_reason: false,
                },
            ],
        "unexpected actions {actions:?}"
    );

    let result = org
        .workflow
        .check_transition(
            TransitionTaskRequest::new(task.id(), org.employee, "ON_HOLD")
                .with_on_hold_reason("soon"),
        )
        .await;
    eyre::ensure!(matches!(
        result,
        Err(TaskWorkflowError::Transition(TransitionError::ReasonTooShort { .. }))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn visibility_follows_reporting_line(
    org: Result<Org, eyre::Report>,
) -> Result<(), eyre::Report> {
    let org = org?;
    let task = create_task(&org, TaskSnapshot::new(org.employee, org.manager), 3)?;

    eyre::ensure!(org.workflow.can_view(task.id(), org.employee).await?);
    eyre::ensure!(org.workflow.can_view(task.id(), org.manager).await?);
    eyre::ensure!(org.workflow.can_view(task.id(), org.head).await?);
    eyre::ensure!(!org.workflow.can_view(task.id(), org.other_manager).await?);
    Ok(())
}
