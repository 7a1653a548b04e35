//! Productivity scores computed from history written by the workflow.

use std::sync::Arc;

use super::helpers::{Org, apply, create_task, june_noon, org};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use rstest::rstest;
use taskboard::{
    scoring::{
        adapters::memory::InMemoryScoringHistory,
        domain::{ScoringConfig, ScoringEngine},
        services::ProductivityService,
    },
    task::{
        domain::{TaskId, TaskSize, TaskSnapshot},
        services::TransitionTaskRequest,
    },
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

async fn deliver(org: &Org, size: TaskSize, day: u32, rework: bool) -> Result<TaskId, eyre::Report> {
    let created = create_task(
        org,
        TaskSnapshot::new(org.employee, org.manager).with_size(size),
        day,
    )?;
    let id = created.id();
    let (mut task, _) = apply(
        org,
        created,
        TransitionTaskRequest::new(id, org.employee, "IN_PROGRESS"),
        day,
    )
    .await?;
    if rework {
        (task, _) = apply(
            org,
            task,
            TransitionTaskRequest::new(id, org.employee, "COMPLETED_PENDING_REVIEW"),
            day,
        )
        .await?;
        (task, _) = apply(
            org,
            task,
            TransitionTaskRequest::new(id, org.manager, "REOPENED")
                .with_reason("Edge cases are not covered"),
            day,
        )
        .await?;
        (task, _) = apply(
            org,
            task,
            TransitionTaskRequest::new(id, org.employee, "IN_PROGRESS"),
            day,
        )
        .await?;
    }
    (task, _) = apply(
        org,
        task,
        TransitionTaskRequest::new(id, org.employee, "COMPLETED_PENDING_REVIEW"),
        day,
    )
    .await?;
    apply(
        org,
        task,
        TransitionTaskRequest::new(id, org.manager, "CLOSED_APPROVED"),
        day,
    )
    .await?;
    Ok(id)
}

type TestService = ProductivityService<InMemoryScoringHistory, FixedClock>;

fn service_at(org: &Org, day: u32, config: ScoringConfig) -> Result<TestService, eyre::Report> {
    Ok(ProductivityService::new(
        Arc::new(org.history.clone()),
        Arc::new(FixedClock(june_noon(day)?)),
        ScoringEngine::try_new(config)?,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn steady_clean_week_scores_high(org: Result<Org, eyre::Report>) -> Result<(), eyre::Report> {
    let org = org?;
    for day in [3, 4, 5, 6, 7] {
        deliver(&org, TaskSize::Large, day, false).await?;
    }
    let service = service_at(&org, 9, ScoringConfig::default())?;

    let score = service.score_member(org.employee, 1).await?;

    eyre::ensure!(score.completed_tasks == 5);
    eyre::ensure!(score.workdays == 5);
    eyre::ensure!(score.output > 0.49 && score.output < 0.51, "output {}", score.output);
    eyre::ensure!(score.quality > 0.99, "quality {}", score.quality);
    eyre::ensure!(score.reliability > 0.99, "reliability {}", score.reliability);
    eyre::ensure!(score.consistency > 0.99, "consistency {}", score.consistency);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rework_recorded_by_workflow_lowers_quality(
    org: Result<Org, eyre::Report>,
) -> Result<(), eyre::Report> {
    let org = org?;
    deliver(&org, TaskSize::Medium, 4, false).await?;
    deliver(&org, TaskSize::Medium, 5, true).await?;
    let service = service_at(&org, 7, ScoringConfig::default())?;

    let score = service.score_member(org.employee, 1).await?;

    eyre::ensure!(score.completed_tasks == 2);
    eyre::ensure!(score.quality > 0.87 && score.quality < 0.88, "quality {}", score.quality);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn manager_scores_are_separate_from_reports(
    org: Result<Org, eyre::Report>,
) -> Result<(), eyre::Report> {
    let org = org?;
    deliver(&org, TaskSize::Xlarge, 4, false).await?;
    let service = service_at(&org, 7, ScoringConfig::lenient())?;

    let score = service.score_member(org.manager, 1).await?;

    eyre::ensure!(score.completed_tasks == 0);
    eyre::ensure!(score.composite < f64::EPSILON);
    Ok(())
}
