//! Sub-score formulas and the composite productivity score.
//!
//! All scores lie in `[0, 1]`. Only tasks completed inside the evaluation
//! window feed output, quality and reliability; consistency spreads those
//! same completions over the window's workdays. Degenerate inputs yield
//! `0.0`.
#![expect(
    clippy::float_arithmetic,
    reason = "scores are normalised fractions"
)]

use super::{
    EvaluationWindow, OutputBasis, ScoreWeights, ScoredTask, ScoringConfig, ScoringError,
    StatusTransition,
};
use crate::task::domain::{TaskId, TaskPriority, TaskSize, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const WORKDAYS_PER_WEEK: f64 = 5.0;
const OVERRUN_SLOPE: f64 = 0.5;

/// Size units credited for completing a task of `size` under
/// [`OutputBasis::SizeUnits`].
#[must_use]
pub const fn size_units(size: TaskSize) -> f64 {
    match size {
        TaskSize::Small => 0.5,
        TaskSize::Medium => 1.0,
        TaskSize::Large => 1.5,
        TaskSize::Xlarge => 2.0,
    }
}

/// Weight of a task of `priority` in the reliability mean.
#[must_use]
pub const fn priority_weight(priority: TaskPriority) -> f64 {
    match priority {
        TaskPriority::P1 => 1.5,
        TaskPriority::P2 => 1.25,
        TaskPriority::P3 => 1.0,
        TaskPriority::P4 => 0.75,
    }
}

/// A task completed inside the window, with the instant it completed.
#[derive(Debug, Clone, Copy)]
struct Completion<'a> {
    task: &'a ScoredTask,
    at: DateTime<Utc>,
}

/// Returns the instant `task` reached `CLOSED_APPROVED`.
///
/// Prefers the task's own `completed_at`, falling back to the latest history
/// entry into `CLOSED_APPROVED`. Tasks in any other status have none.
#[must_use]
pub fn completion_instant(
    task: &ScoredTask,
    history: &[StatusTransition],
) -> Option<DateTime<Utc>> {
    if task.status() != TaskStatus::ClosedApproved {
        return None;
    }
    task.completed_at().or_else(|| {
        history
            .iter()
            .filter(|entry| {
                entry.task_id() == task.id() && entry.to_status() == TaskStatus::ClosedApproved
            })
            .map(StatusTransition::created_at)
            .max()
    })
}

fn completions<'a>(
    tasks: &'a [ScoredTask],
    history: &[StatusTransition],
    window: &EvaluationWindow,
) -> Vec<Completion<'a>> {
    tasks
        .iter()
        .filter_map(|task| {
            completion_instant(task, history)
                .filter(|at| window.contains(*at))
                .map(|at| Completion { task, at })
        })
        .collect()
}

fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

fn reopen_count(task_id: TaskId, history: &[StatusTransition]) -> usize {
    history
        .iter()
        .filter(|entry| entry.task_id() == task_id && entry.to_status() == TaskStatus::Reopened)
        .count()
}

fn finite_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Scores throughput against the weekly target, prorated by workdays.
///
/// The number of completed tasks is divided by
/// `weekly_target × workdays / 5` and capped at one.
#[must_use]
pub fn calculate_output_score(
    tasks: &[ScoredTask],
    history: &[StatusTransition],
    window: &EvaluationWindow,
    weekly_target: u32,
) -> f64 {
    let delivered = count_as_f64(completions(tasks, history, window).len());
    output_ratio(delivered, window, weekly_target)
}

/// Scores throughput like [`calculate_output_score`], but credits each
/// completion with the [`size_units`] of its task instead of one.
#[must_use]
pub fn calculate_size_weighted_output_score(
    tasks: &[ScoredTask],
    history: &[StatusTransition],
    window: &EvaluationWindow,
    weekly_target: u32,
) -> f64 {
    let delivered: f64 = completions(tasks, history, window)
        .iter()
        .map(|completion| size_units(completion.task.size()))
        .sum();
    output_ratio(delivered, window, weekly_target)
}

fn output_ratio(delivered: f64, window: &EvaluationWindow, weekly_target: u32) -> f64 {
    let expected = f64::from(weekly_target) * f64::from(window.workdays()) / WORKDAYS_PER_WEEK;
    if expected <= 0.0 {
        return 0.0;
    }
    finite_unit(delivered / expected)
}

/// Scores rework and estimate overruns across completed tasks.
#[must_use]
pub fn calculate_quality_score(
    tasks: &[ScoredTask],
    history: &[StatusTransition],
    window: &EvaluationWindow,
    config: &ScoringConfig,
) -> f64 {
    let completed = completions(tasks, history, window);
    if completed.is_empty() {
        return 0.0;
    }
    let total: f64 = completed
        .iter()
        .map(|completion| task_quality(completion.task, history, config))
        .sum();
    finite_unit(total / count_as_f64(completed.len()))
}

fn task_quality(task: &ScoredTask, history: &[StatusTransition], config: &ScoringConfig) -> f64 {
    let reopens = count_as_f64(reopen_count(task.id(), history));
    let rework = (1.0 - config.reopen_penalty * reopens).max(0.0);
    rework * (1.0 - overrun_penalty(task, config.overrun_penalty_cap))
}

fn overrun_penalty(task: &ScoredTask, cap: f64) -> f64 {
    match (task.estimated_minutes(), task.actual_minutes()) {
        (Some(estimate), Some(actual)) if estimate > 0 && actual > estimate => {
            let ratio = f64::from(actual) / f64::from(estimate);
            ((ratio - 1.0) * OVERRUN_SLOPE).min(cap)
        }
        _ => 0.0,
    }
}

/// Scores on-time delivery, weighted by priority.
///
/// A task with no deadline is on time. Each carry-forward erodes the credit
/// of an on-time task by `carry_forward_decay`; late tasks earn nothing.
#[must_use]
pub fn calculate_reliability_score(
    tasks: &[ScoredTask],
    history: &[StatusTransition],
    window: &EvaluationWindow,
    config: &ScoringConfig,
) -> f64 {
    let (earned, possible) = completions(tasks, history, window).iter().fold(
        (0.0, 0.0),
        |(earned, possible), completion| {
            let weight = priority_weight(completion.task.priority());
            let credit = on_time_credit(completion, config.carry_forward_decay);
            (earned + weight * credit, possible + weight)
        },
    );
    if possible <= 0.0 {
        return 0.0;
    }
    finite_unit(earned / possible)
}

fn on_time_credit(completion: &Completion<'_>, decay: f64) -> f64 {
    let on_time = completion
        .task
        .deadline()
        .is_none_or(|deadline| completion.at <= deadline);
    if !on_time {
        return 0.0;
    }
    let carried = f64::from(completion.task.carry_forward_count());
    (1.0 - decay * carried).max(0.0)
}

/// Scores how evenly completions spread over the window's workdays.
///
/// Completions are counted per workday, weekend completions credited to an
/// adjacent workday in the window. The score is `1 / (1 + cv)` where `cv`
/// is the population coefficient of variation of the daily counts.
#[must_use]
pub fn calculate_consistency_score(
    tasks: &[ScoredTask],
    history: &[StatusTransition],
    window: &EvaluationWindow,
) -> f64 {
    let mut daily: BTreeMap<NaiveDate, u32> =
        window.workday_dates().map(|day| (day, 0)).collect();
    if daily.is_empty() {
        return 0.0;
    }
    for completion in completions(tasks, history, window) {
        let credited = window.credited_workday(completion.at.date_naive());
        if let Some(count) = credited.and_then(|day| daily.get_mut(&day)) {
            *count = count.saturating_add(1);
        }
    }

    let days = count_as_f64(daily.len());
    let total: f64 = daily.values().copied().map(f64::from).sum();
    if total <= 0.0 {
        return 0.0;
    }
    let mean = total / days;
    let variance = daily
        .values()
        .map(|count| (f64::from(*count) - mean).powi(2))
        .sum::<f64>()
        / days;
    let coefficient_of_variation = variance.sqrt() / mean;
    finite_unit(1.0 / (1.0 + coefficient_of_variation))
}

/// Combines the four sub-scores with `weights`, clamped to `[0, 1]`.
///
/// Non-finite results collapse to `0.0`.
#[must_use]
pub fn calculate_composite(
    output: f64,
    quality: f64,
    reliability: f64,
    consistency: f64,
    weights: &ScoreWeights,
) -> f64 {
    let weighted: f64 = [
        (output, weights.output),
        (quality, weights.quality),
        (reliability, weights.reliability),
        (consistency, weights.consistency),
    ]
    .iter()
    .map(|(score, weight)| score * weight)
    .sum();
    finite_unit(weighted)
}

/// Result of scoring one member over one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductivityScore {
    /// Throughput against target.
    pub output: f64,
    /// Rework and overrun penalty.
    pub quality: f64,
    /// On-time delivery.
    pub reliability: f64,
    /// Evenness of daily output.
    pub consistency: f64,
    /// Weighted combination of the four.
    pub composite: f64,
    /// Number of tasks completed inside the window.
    pub completed_tasks: u32,
    /// Number of workdays in the window.
    pub workdays: u32,
    /// Window the score covers.
    pub window: EvaluationWindow,
}

/// Applies a [`ScoringConfig`] to task sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Creates an engine without validating `config`.
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ScoringConfig::validate`].
    pub fn try_new(config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Computes every sub-score and the composite.
    #[must_use]
    pub fn score(
        &self,
        tasks: &[ScoredTask],
        history: &[StatusTransition],
        window: &EvaluationWindow,
    ) -> ProductivityScore {
        let target = self.config.weekly_output_target;
        let output = match self.config.output_basis {
            OutputBasis::CompletedTasks => calculate_output_score(tasks, history, window, target),
            OutputBasis::SizeUnits => {
                calculate_size_weighted_output_score(tasks, history, window, target)
            }
        };
        let quality = calculate_quality_score(tasks, history, window, &self.config);
        let reliability = calculate_reliability_score(tasks, history, window, &self.config);
        let consistency = calculate_consistency_score(tasks, history, window);
        let composite = calculate_composite(
            output,
            quality,
            reliability,
            consistency,
            &self.config.weights,
        );
        let completed = completions(tasks, history, window).len();
        ProductivityScore {
            output,
            quality,
            reliability,
            consistency,
            composite,
            completed_tasks: u32::try_from(completed).unwrap_or(u32::MAX),
            workdays: window.workdays(),
            window: *window,
        }
    }
}
