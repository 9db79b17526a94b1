//! Domain model for workspace-scoped tasks.
//!
//! A task belongs to exactly one workspace. Its calendar day is decided by
//! `due_at` when present and by its creation instant otherwise (a "legacy"
//! task).

mod error;
mod fields;
mod ids;
mod priority;
mod task;
mod view;

pub use error::{ParsePriorityError, TaskDomainError};
pub use fields::{Assignees, Category, DueAtChange, TaskChanges, TaskLabel};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{NewTask, PersistedTaskData, Task};
pub use view::TaskView;
