//! In-memory workflow directory for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    access::domain::{Member, UserId},
    task::{
        domain::{TaskId, TaskSnapshot},
        ports::{WorkflowDirectory, WorkflowDirectoryError, WorkflowDirectoryResult},
    },
};

/// Thread-safe in-memory store of tasks and members.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkflowDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    tasks: HashMap<TaskId, TaskSnapshot>,
    members: HashMap<UserId, Member>,
}

fn lock_error(err: &impl ToString) -> WorkflowDirectoryError {
    WorkflowDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryWorkflowDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a task snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDirectoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn put_task(&self, task: TaskSnapshot) -> WorkflowDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.tasks.insert(task.id(), task);
        Ok(())
    }

    /// Inserts or replaces a member.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDirectoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn put_member(&self, member: Member) -> WorkflowDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.members.insert(member.id(), member);
        Ok(())
    }
}

#[async_trait]
impl WorkflowDirectory for InMemoryWorkflowDirectory {
    async fn find_task(&self, id: TaskId) -> WorkflowDirectoryResult<Option<TaskSnapshot>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_member(&self, id: UserId) -> WorkflowDirectoryResult<Option<Member>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.members.get(&id).cloned())
    }

    async fn direct_reports(&self, manager_id: UserId) -> WorkflowDirectoryResult<Vec<UserId>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let mut reports: Vec<UserId> = state
            .members
            .values()
            .filter(|member| member.manager_id() == Some(manager_id))
            .map(Member::id)
            .collect();
        reports.sort_unstable();
        Ok(reports)
    }
}
