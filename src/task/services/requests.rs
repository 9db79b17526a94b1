//! Request payloads for task creation and partial updates.

use crate::task::domain::Priority;
use serde::{Deserialize, Deserializer};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub(super) label: String,
    #[serde(default)]
    pub(super) completed: bool,
    #[serde(default)]
    pub(super) priority: Option<Priority>,
    #[serde(default)]
    pub(super) category: Option<String>,
    #[serde(default, alias = "dueAt")]
    pub(super) due_date: Option<String>,
    #[serde(default)]
    pub(super) assignees: Option<Vec<String>>,
}

impl CreateTaskRequest {
    /// Creates a request with only a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            completed: false,
            priority: None,
            category: None,
            due_date: None,
            assignees: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the raw due-date input (calendar day or date-time).
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets raw assignee identifiers; malformed ones are dropped on create.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = String>) -> Self {
        self.assignees = Some(assignees.into_iter().collect());
        self
    }

    /// Creates the task already completed.
    #[must_use]
    pub const fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Due-date part of a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DueDatePatch {
    /// Field absent: leave the due date unchanged.
    #[default]
    Keep,
    /// Field null or empty: remove the due date.
    Clear,
    /// Field set: normalize and store the new due date.
    Set(String),
}

/// Partial update; only supplied fields are written.
///
/// When deserialized, an absent `dueDate` (or `dueAt`) keeps the current
/// value while `null` or `""` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub(super) label: Option<String>,
    pub(super) completed: Option<bool>,
    pub(super) priority: Option<Priority>,
    pub(super) category: Option<String>,
    #[serde(default, alias = "dueAt", deserialize_with = "deserialize_due_date")]
    pub(super) due_date: DueDatePatch,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets a new raw due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = DueDatePatch::Set(due_date.into());
        self
    }

    /// Removes the due date, reverting to creation-day bucketing.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = DueDatePatch::Clear;
        self
    }

    /// Returns the due-date part of the patch.
    #[must_use]
    pub const fn due_date(&self) -> &DueDatePatch {
        &self.due_date
    }
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<DueDatePatch, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw {
        None => DueDatePatch::Clear,
        Some(value) if value.trim().is_empty() => DueDatePatch::Clear,
        Some(value) => DueDatePatch::Set(value),
    })
}
