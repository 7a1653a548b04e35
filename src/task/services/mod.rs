//! Application services for task workflow decisions.

mod workflow;

pub use workflow::{
    AvailableAction, TaskWorkflowError, TaskWorkflowResult, TaskWorkflowService,
    TransitionDecision, TransitionTaskRequest,
};
