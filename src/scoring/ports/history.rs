//! Read port onto the tasks and status history a score is computed from.

use crate::access::domain::UserId;
use crate::scoring::domain::{ScoredTask, StatusTransition};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for scoring source operations.
pub type ScoringSourceResult<T> = Result<T, ScoringSourceError>;

/// Source of scoring inputs.
#[async_trait]
pub trait ScoringHistorySource: Send + Sync {
    /// Returns every task owned by `owner_id`, in any status.
    async fn tasks_owned_by(&self, owner_id: UserId) -> ScoringSourceResult<Vec<ScoredTask>>;

    /// Returns the status history of `task_ids`, oldest entry first.
    async fn history_for(&self, task_ids: &[TaskId])
    -> ScoringSourceResult<Vec<StatusTransition>>;
}

/// Errors returned by scoring source implementations.
#[derive(Debug, Clone, Error)]
pub enum ScoringSourceError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ScoringSourceError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
