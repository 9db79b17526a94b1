//! Task aggregate root.

use super::{Assignees, Category, DueAtChange, Priority, TaskChanges, TaskId, TaskLabel};
use crate::calendar::DayRange;
use crate::identity::domain::{UserId, WorkspaceId};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    workspace_id: WorkspaceId,
    creator_id: UserId,
    label: TaskLabel,
    completed: bool,
    priority: Priority,
    category: Category,
    due_at: Option<DateTime<Utc>>,
    assignees: Assignees,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning workspace.
    pub workspace_id: WorkspaceId,
    /// Creating user.
    pub creator_id: UserId,
    /// Task label.
    pub label: TaskLabel,
    /// Initial completion flag.
    pub completed: bool,
    /// Priority.
    pub priority: Priority,
    /// Category.
    pub category: Category,
    /// Absolute due instant, if any.
    pub due_at: Option<DateTime<Utc>>,
    /// Assignees.
    pub assignees: Assignees,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning workspace.
    pub workspace_id: WorkspaceId,
    /// Persisted creator.
    pub creator_id: UserId,
    /// Persisted label.
    pub label: TaskLabel,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted category.
    pub category: Category,
    /// Persisted due instant.
    pub due_at: Option<DateTime<Utc>>,
    /// Persisted assignees.
    pub assignees: Assignees,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    #[must_use]
    pub fn new(data: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc().trunc_subsecs(3);
        Self {
            id: TaskId::new(),
            workspace_id: data.workspace_id,
            creator_id: data.creator_id,
            label: data.label,
            completed: data.completed,
            priority: data.priority,
            category: data.category,
            due_at: data.due_at,
            assignees: data.assignees,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            workspace_id: data.workspace_id,
            creator_id: data.creator_id,
            label: data.label,
            completed: data.completed,
            priority: data.priority,
            category: data.category,
            due_at: data.due_at,
            assignees: data.assignees,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Returns the creating user.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &TaskLabel {
        &self.label
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the due instant, or `None` for a legacy task.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the assignees.
    #[must_use]
    pub const fn assignees(&self) -> &Assignees {
        &self.assignees
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the instant that decides which calendar day the task is on.
    ///
    /// The due date wins when present; legacy tasks fall back to their
    /// creation instant.
    #[must_use]
    pub fn bucket_instant(&self) -> DateTime<Utc> {
        self.due_at.unwrap_or(self.created_at)
    }

    /// Returns `true` when the task belongs to the given day.
    #[must_use]
    pub fn falls_on(&self, range: &DayRange) -> bool {
        range.contains(self.bucket_instant())
    }

    /// Applies a partial update, touching only the supplied fields.
    ///
    /// An empty change set leaves the task, including `updated_at`,
    /// untouched.
    pub fn apply(&mut self, changes: &TaskChanges, updated_at: DateTime<Utc>) {
        if changes.is_empty() {
            return;
        }
        if let Some(label) = &changes.label {
            self.label = label.clone();
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(category) = &changes.category {
            self.category = category.clone();
        }
        match changes.due_at {
            DueAtChange::Keep => {}
            DueAtChange::Clear => self.due_at = None,
            DueAtChange::Set(due_at) => self.due_at = Some(due_at),
        }
        self.updated_at = updated_at;
    }
}
