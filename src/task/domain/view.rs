//! Externally visible task shape.

use super::Task;
use crate::calendar::format_instant;
use serde::{Deserialize, Serialize};

/// Serialized task as exposed to clients.
///
/// Ids are plain strings and instants are ISO-8601 with millisecond
/// precision. `dueAt` is `null` for legacy tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: String,
    /// Owning workspace identifier.
    pub workspace_id: String,
    /// Creator identifier.
    pub created_by: String,
    /// Task label.
    pub label: String,
    /// Completion flag.
    pub completed: bool,
    /// Priority (`low`, `medium`, `high`).
    pub priority: String,
    /// Category.
    pub category: String,
    /// Due instant or `null`.
    pub due_at: Option<String>,
    /// Assignee identifiers in order.
    pub assignees: Vec<String>,
    /// Creation instant.
    pub created_at: String,
    /// Latest update instant.
    pub updated_at: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            workspace_id: task.workspace_id().to_string(),
            created_by: task.creator_id().to_string(),
            label: task.label().as_str().to_owned(),
            completed: task.completed(),
            priority: task.priority().as_str().to_owned(),
            category: task.category().as_str().to_owned(),
            due_at: task.due_at().map(format_instant),
            assignees: task
                .assignees()
                .as_slice()
                .iter()
                .map(ToString::to_string)
                .collect(),
            created_at: format_instant(task.created_at()),
            updated_at: format_instant(task.updated_at()),
        }
    }
}
