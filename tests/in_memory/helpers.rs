//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;
use taskboard::{
    access::domain::{Member, Role, UserId},
    scoring::{adapters::memory::InMemoryScoringHistory, domain::StatusTransition},
    task::{
        adapters::memory::InMemoryWorkflowDirectory,
        domain::{TaskSnapshot, TaskStatus},
        services::{TaskWorkflowService, TransitionDecision, TransitionTaskRequest},
    },
};

/// A small department with one reporting line and one bystander manager.
pub struct Org {
    pub directory: InMemoryWorkflowDirectory,
    pub history: InMemoryScoringHistory,
    pub workflow: TaskWorkflowService<InMemoryWorkflowDirectory>,
    pub head: UserId,
    pub manager: UserId,
    pub other_manager: UserId,
    pub employee: UserId,
}

/// Provides a fresh organisation for each test.
///
/// # Errors
///
/// Returns an error if a member cannot be stored.
#[fixture]
pub fn org() -> Result<Org, eyre::Report> {
    let directory = InMemoryWorkflowDirectory::new();
    let head = UserId::new();
    let manager = UserId::new();
    let other_manager = UserId::new();
    let employee = UserId::new();
    directory.put_member(Member::new(head, Role::DepartmentHead))?;
    directory.put_member(Member::new(manager, Role::Manager).with_manager(head))?;
    directory.put_member(Member::new(other_manager, Role::Manager).with_manager(head))?;
    directory.put_member(Member::new(employee, Role::Employee).with_manager(manager))?;
    Ok(Org {
        workflow: TaskWorkflowService::new(Arc::new(directory.clone())),
        directory,
        history: InMemoryScoringHistory::new(),
        head,
        manager,
        other_manager,
        employee,
    })
}

/// Returns noon UTC on the given day of June 2024. The 3rd is a Monday.
///
/// # Errors
///
/// Returns an error if the day does not exist.
pub fn june_noon(day: u32) -> Result<DateTime<Utc>, eyre::Report> {
    Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid instant on day {day}"))
}

/// Stores a new task and records its creation.
///
/// # Errors
///
/// Returns an error if either store rejects the write.
pub fn create_task(org: &Org, task: TaskSnapshot, day: u32) -> Result<TaskSnapshot, eyre::Report> {
    org.directory.put_task(task.clone())?;
    org.history.put_task(&task)?;
    org.history
        .record_transition(StatusTransition::created(task.id(), june_noon(day)?))?;
    Ok(task)
}

/// Asks the workflow for a decision and, when allowed, applies it to both
/// stores the way a persistence layer would.
///
/// # Errors
///
/// Returns the workflow rejection or any store failure.
pub async fn apply(
    org: &Org,
    task: TaskSnapshot,
    request: TransitionTaskRequest,
    day: u32,
) -> Result<(TaskSnapshot, TransitionDecision), eyre::Report> {
    let decision = org.workflow.check_transition(request).await?;
    let at = june_noon(day)?;
    let mut updated = task.with_status(decision.to);
    if decision.to == TaskStatus::ClosedApproved {
        updated = updated.with_completed_at(at);
    }
    org.directory.put_task(updated.clone())?;
    org.history.put_task(&updated)?;
    org.history.record_transition(StatusTransition::new(
        updated.id(),
        Some(decision.from),
        decision.to,
        at,
    ))?;
    Ok((updated, decision))
}
