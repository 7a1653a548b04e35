//! Scores a member over a trailing or explicit window.

use crate::{
    access::domain::UserId,
    scoring::{
        domain::{EvaluationWindow, ProductivityScore, ScoredTask, ScoringEngine},
        ports::{ScoringHistorySource, ScoringSourceError},
    },
    task::domain::TaskId,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Service-level errors for scoring operations.
#[derive(Debug, Error)]
pub enum ScoringServiceError {
    /// Loading scoring inputs failed.
    #[error(transparent)]
    Source(#[from] ScoringSourceError),
}

/// Result type for scoring service operations.
pub type ScoringServiceResult<T> = Result<T, ScoringServiceError>;

/// Loads a member's tasks and history and runs the scoring engine.
#[derive(Clone)]
pub struct ProductivityService<S, C>
where
    S: ScoringHistorySource,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
    engine: ScoringEngine,
}

impl<S, C> ProductivityService<S, C>
where
    S: ScoringHistorySource,
    C: Clock + Send + Sync,
{
    /// Creates a new productivity service.
    #[must_use]
    pub const fn new(source: Arc<S>, clock: Arc<C>, engine: ScoringEngine) -> Self {
        Self {
            source,
            clock,
            engine,
        }
    }

    /// Returns the engine used for scoring.
    #[must_use]
    pub const fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Scores `owner_id` over the `weeks` whole weeks ending today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`ScoringServiceError::Source`] when inputs cannot be loaded.
    pub async fn score_member(
        &self,
        owner_id: UserId,
        weeks: u32,
    ) -> ScoringServiceResult<ProductivityScore> {
        let today = self.clock.utc().date_naive();
        let window = EvaluationWindow::trailing_weeks(today, weeks);
        self.score_member_in(owner_id, window).await
    }

    /// Scores `owner_id` over `window`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringServiceError::Source`] when inputs cannot be loaded.
    pub async fn score_member_in(
        &self,
        owner_id: UserId,
        window: EvaluationWindow,
    ) -> ScoringServiceResult<ProductivityScore> {
        let tasks = self
            .source
            .tasks_owned_by(owner_id)
            .await
            .inspect_err(|err| warn!(%owner_id, error = %err, "loading owned tasks failed"))?;
        let task_ids: Vec<TaskId> = tasks.iter().map(ScoredTask::id).collect();
        let history = self
            .source
            .history_for(&task_ids)
            .await
            .inspect_err(|err| warn!(%owner_id, error = %err, "loading task history failed"))?;

        let score = self.engine.score(&tasks, &history, &window);
        debug!(
            %owner_id,
            start = %window.start(),
            end = %window.end(),
            composite = score.composite,
            completed = score.completed_tasks,
            "productivity scored"
        );
        Ok(score)
    }
}
