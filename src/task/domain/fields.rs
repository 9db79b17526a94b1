//! Validated task fields and partial-update change sets.

use super::{Priority, TaskDomainError};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text task label, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskLabel(String);

impl TaskLabel {
    /// Creates a validated label.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyLabel`] when the trimmed value is empty.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyLabel);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text task category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Category assigned when none is supplied.
    pub const DEFAULT: &'static str = "General";

    /// Creates a category, falling back to [`Category::DEFAULT`] when blank.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_owned())
    }

    /// Returns the category as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

/// Ordered, duplicate-free set of assignee identities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignees(Vec<UserId>);

impl Assignees {
    /// Builds assignees from raw identifiers supplied by a caller.
    ///
    /// Malformed identifiers are dropped silently and duplicates keep their
    /// first position. When nothing valid remains, the creator is assigned.
    #[must_use]
    pub fn from_input<I, S>(creator: UserId, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = raw
            .into_iter()
            .filter_map(|value| value.as_ref().parse::<UserId>().ok());
        let assignees = Self::from_ids(parsed);
        if assignees.is_empty() {
            return Self::creator_only(creator);
        }
        assignees
    }

    /// Builds assignees from known identifiers, removing duplicates.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = UserId>) -> Self {
        let mut unique: Vec<UserId> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self(unique)
    }

    /// Assigns only the creator.
    #[must_use]
    pub fn creator_only(creator: UserId) -> Self {
        Self(vec![creator])
    }

    /// Returns the assignees in order.
    #[must_use]
    pub fn as_slice(&self) -> &[UserId] {
        &self.0
    }

    /// Returns `true` when nobody is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Change to the due date carried by a partial update.
///
/// `Keep` (field absent) and `Clear` (field explicitly null) are distinct:
/// clearing reverts the task to creation-day bucketing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueAtChange {
    /// Leave the due date unchanged.
    #[default]
    Keep,
    /// Remove the due date.
    Clear,
    /// Replace the due date.
    Set(DateTime<Utc>),
}

/// Validated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// New label.
    pub label: Option<TaskLabel>,
    /// New completion flag.
    pub completed: Option<bool>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New category.
    pub category: Option<Category>,
    /// Due-date change.
    pub due_at: DueAtChange,
}

impl TaskChanges {
    /// Returns `true` when the change set touches no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_at == DueAtChange::Keep
    }

    /// Returns the external names of the fields this change set touches.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.label.is_some() {
            names.push("label");
        }
        if self.completed.is_some() {
            names.push("completed");
        }
        if self.priority.is_some() {
            names.push("priority");
        }
        if self.category.is_some() {
            names.push("category");
        }
        if self.due_at != DueAtChange::Keep {
            names.push("dueAt");
        }
        names
    }
}
