//! Shared world state for task state transition BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use taskboard::{
    access::domain::UserId,
    task::{
        adapters::memory::InMemoryWorkflowDirectory,
        domain::TaskSnapshot,
        services::{TaskWorkflowError, TaskWorkflowService, TransitionDecision},
    },
};

/// Service type used by the BDD world.
pub type TestWorkflowService = TaskWorkflowService<InMemoryWorkflowDirectory>;

/// Scenario world for task transition behaviour tests.
pub struct TaskTransitionWorld {
    pub directory: InMemoryWorkflowDirectory,
    pub service: TestWorkflowService,
    pub members: HashMap<String, UserId>,
    pub task: Option<TaskSnapshot>,
    pub reason: Option<String>,
    pub on_hold_reason: Option<String>,
    pub last_result: Option<Result<TransitionDecision, TaskWorkflowError>>,
}

impl TaskTransitionWorld {
    /// Creates a world with an empty directory.
    #[must_use]
    pub fn new() -> Self {
        let directory = InMemoryWorkflowDirectory::new();
        let service = TaskWorkflowService::new(Arc::new(directory.clone()));

        Self {
            directory,
            service,
            members: HashMap::new(),
            task: None,
            reason: None,
            on_hold_reason: None,
            last_result: None,
        }
    }

    /// Looks up a member registered under `name`.
    pub fn member(&self, name: &str) -> Result<UserId, eyre::Report> {
        self.members
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown member {name} in scenario world"))
    }

    /// Returns the recorded transition outcome.
    pub fn result(&self) -> Result<&Result<TransitionDecision, TaskWorkflowError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing transition result"))
    }
}

impl Default for TaskTransitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTransitionWorld {
    TaskTransitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
