//! Domain model for the task workflow.
//!
//! The task domain owns the status vocabulary, the authoritative transition
//! rule table with its guards, and the Kanban board projection derived from
//! that table. Everything here is pure and free of infrastructure concerns.

mod attributes;
mod error;
mod ids;
pub mod kanban;
mod status;
mod task;
pub mod transition;

pub use attributes::{TaskPriority, TaskSize};
pub use error::{
    ParseKanbanColumnError, ParseTaskPriorityError, ParseTaskSizeError, ParseTaskStatusError,
    TransitionError, TransitionErrorKind,
};
pub use ids::{KpiBucketId, TaskId};
pub use kanban::{DropTarget, KanbanColumn};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, TaskSnapshot};
pub use transition::{MIN_REASON_LENGTH, TransitionContext, TransitionRule};
