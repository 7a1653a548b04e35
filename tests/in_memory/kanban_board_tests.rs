//! Board drops resolved by the Kanban projection and checked against the
//! workflow service.

use super::helpers::{Org, create_task, org};
use rstest::rstest;
use taskboard::{
    access::domain::UserId,
    task::{
        domain::{
            DropTarget, KanbanColumn, TaskSnapshot, TaskStatus, TransitionErrorKind,
            kanban::drop_target_status,
        },
        services::{TaskWorkflowError, TransitionTaskRequest},
    },
};

enum Actor {
    Owner,
    Manager,
}

const fn actor_id(org: &Org, actor: &Actor) -> UserId {
    match actor {
        Actor::Owner => org.employee,
        Actor::Manager => org.manager,
    }
}

#[rstest]
#[case::start_new(TaskStatus::New, KanbanColumn::InProgress, Actor::Owner, TaskStatus::InProgress)]
#[case::submit(
    TaskStatus::InProgress,
    KanbanColumn::InReview,
    Actor::Owner,
    TaskStatus::CompletedPendingReview
)]
#[case::resume_held(TaskStatus::OnHold, KanbanColumn::InProgress, Actor::Owner, TaskStatus::InProgress)]
#[case::restart_reopened(
    TaskStatus::Reopened,
    KanbanColumn::InProgress,
    Actor::Owner,
    TaskStatus::InProgress
)]
#[case::approve(
    TaskStatus::CompletedPendingReview,
    KanbanColumn::Done,
    Actor::Manager,
    TaskStatus::ClosedApproved
)]
#[tokio::test(flavor = "multi_thread")]
async fn board_drop_agrees_with_workflow(
    org: Result<Org, eyre::Report>,
    #[case] from: TaskStatus,
    #[case] column: KanbanColumn,
    #[case] actor: Actor,
    #[case] expected: TaskStatus,
) -> Result<(), eyre::Report> {
    let org = org?;
    let task = create_task(
        &org,
        TaskSnapshot::new(org.employee, org.manager).with_status(from),
        3,
    )?;

    let target = drop_target_status(task.status(), column, task.requires_review())
        .ok_or_else(|| eyre::eyre!("no drop target for {from} onto {column}"))?;
    eyre::ensure!(target.status == expected);

    let decision = org
        .workflow
        .check_transition(TransitionTaskRequest::new(
            task.id(),
            actor_id(&org, &actor),
            target.status.as_str(),
        ))
        .await?;
    eyre::ensure!(decision.to == expected);
    eyre::ensure!(decision.requires_reason == target.requires_reason);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_reopen_of_approved_task_is_refused_by_workflow(
    org: Result<Org, eyre::Report>,
) -> Result<(), eyre::Report> {
    let org = org?;
    let task = create_task(
        &org,
        TaskSnapshot::new(org.employee, org.manager).with_status(TaskStatus::ClosedApproved),
        3,
    )?;

    let target =
        drop_target_status(task.status(), KanbanColumn::InProgress, task.requires_review());
    eyre::ensure!(
        target
            == Some(DropTarget {
                status: TaskStatus::Reopened,
                requires_reason: true,
            })
    );

    let result = org
        .workflow
        .check_transition(
            TransitionTaskRequest::new(task.id(), org.manager, "REOPENED")
                .with_reason("Customer reported a regression"),
        )
        .await;
    let Err(TaskWorkflowError::Transition(err)) = &result else {
        return Err(eyre::eyre!("expected a transition rejection, got {result:?}"));
    };
    eyre::ensure!(err.kind() == TransitionErrorKind::InvalidTransition);
    Ok(())
}

#[rstest]
fn review_free_task_drops_straight_to_done() -> Result<(), eyre::Report> {
    let task = TaskSnapshot::new(UserId::new(), UserId::new())
        .with_status(TaskStatus::InProgress)
        .with_requires_review(false);

    let target = drop_target_status(task.status(), KanbanColumn::Done, task.requires_review());

    eyre::ensure!(
        target
            == Some(DropTarget {
                status: TaskStatus::ClosedApproved,
                requires_reason: false,
            })
    );
    eyre::ensure!(
        drop_target_status(task.status(), KanbanColumn::InReview, task.requires_review()).is_none()
    );
    Ok(())
}

#[rstest]
#[case::owner(Actor::Owner)]
#[case::manager(Actor::Manager)]
#[tokio::test(flavor = "multi_thread")]
async fn review_free_drop_to_done_is_refused_by_workflow(
    org: Result<Org, eyre::Report>,
    #[case] actor: Actor,
) -> Result<(), eyre::Report> {
    let org = org?;
    let task = create_task(
        &org,
        TaskSnapshot::new(org.employee, org.manager)
            .with_status(TaskStatus::InProgress)
            .with_requires_review(false),
        3,
    )?;

    let target = drop_target_status(task.status(), KanbanColumn::Done, task.requires_review());
    eyre::ensure!(target.map(|drop| drop.status) == Some(TaskStatus::ClosedApproved));

    let result = org
        .workflow
        .check_transition(TransitionTaskRequest::new(
            task.id(),
            actor_id(&org, &actor),
            "CLOSED_APPROVED",
        ))
        .await;
    let Err(TaskWorkflowError::Transition(err)) = &result else {
        return Err(eyre::eyre!("expected a transition rejection, got {result:?}"));
    };
    eyre::ensure!(err.kind() == TransitionErrorKind::InvalidTransition);
    Ok(())
}
