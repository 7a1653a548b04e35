//! In-memory scoring source.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    access::domain::UserId,
    scoring::{
        domain::{ScoredTask, StatusTransition},
        ports::{ScoringHistorySource, ScoringSourceError, ScoringSourceResult},
    },
    task::domain::{TaskId, TaskSnapshot},
};

/// Thread-safe in-memory store of owned tasks and their history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoringHistory {
    state: Arc<RwLock<InMemoryHistoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryHistoryState {
    tasks: HashMap<TaskId, OwnedTask>,
    history: Vec<StatusTransition>,
}

#[derive(Debug)]
struct OwnedTask {
    owner_id: UserId,
    task: ScoredTask,
}

fn lock_error(err: &impl ToString) -> ScoringSourceError {
    ScoringSourceError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryScoringHistory {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the scoring view of `task`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringSourceError::Persistence`] when the lock is poisoned.
    pub fn put_task(&self, task: &TaskSnapshot) -> ScoringSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.tasks.insert(
            task.id(),
            OwnedTask {
                owner_id: task.owner_id(),
                task: ScoredTask::from(task),
            },
        );
        Ok(())
    }

    /// Appends a history entry.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringSourceError::Persistence`] when the lock is poisoned.
    pub fn record_transition(&self, transition: StatusTransition) -> ScoringSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.history.push(transition);
        Ok(())
    }
}

#[async_trait]
impl ScoringHistorySource for InMemoryScoringHistory {
    async fn tasks_owned_by(&self, owner_id: UserId) -> ScoringSourceResult<Vec<ScoredTask>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let mut tasks: Vec<ScoredTask> = state
            .tasks
            .values()
            .filter(|owned| owned.owner_id == owner_id)
            .map(|owned| owned.task.clone())
            .collect();
        tasks.sort_unstable_by_key(ScoredTask::id);
        Ok(tasks)
    }

    async fn history_for(
        &self,
        task_ids: &[TaskId],
    ) -> ScoringSourceResult<Vec<StatusTransition>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let mut entries: Vec<StatusTransition> = state
            .history
            .iter()
            .filter(|entry| task_ids.contains(&entry.task_id()))
            .cloned()
            .collect();
        entries.sort_by_key(StatusTransition::created_at);
        Ok(entries)
    }
}
