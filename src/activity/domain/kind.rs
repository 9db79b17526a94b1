//! Closed classification of activity events.

use super::ActivityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable event-type tags; the storage strings never change once shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// A task was created.
    TaskCreated,
    /// A task's fields other than completion were edited.
    TaskUpdated,
    /// A task's completion flag was set.
    TaskToggled,
    /// A task was deleted.
    TaskDeleted,
    /// Several tasks were completed at once.
    TasksBulkCompleted,
    /// Several tasks were deleted at once.
    TasksBulkDeleted,
    /// A workspace was created.
    WorkspaceCreated,
    /// A user joined a workspace.
    WorkspaceJoined,
    /// A user left a workspace.
    WorkspaceLeft,
    /// A workspace was deleted.
    WorkspaceDeleted,
    /// A member was removed from a workspace.
    MemberRemoved,
}

impl ActivityType {
    /// All event types, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::TaskCreated,
        Self::TaskUpdated,
        Self::TaskToggled,
        Self::TaskDeleted,
        Self::TasksBulkCompleted,
        Self::TasksBulkDeleted,
        Self::WorkspaceCreated,
        Self::WorkspaceJoined,
        Self::WorkspaceLeft,
        Self::WorkspaceDeleted,
        Self::MemberRemoved,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskCreated => "task_created",
            Self::TaskUpdated => "task_updated",
            Self::TaskToggled => "task_toggled",
            Self::TaskDeleted => "task_deleted",
            Self::TasksBulkCompleted => "tasks_bulk_completed",
            Self::TasksBulkDeleted => "tasks_bulk_deleted",
            Self::WorkspaceCreated => "workspace_created",
            Self::WorkspaceJoined => "workspace_joined",
            Self::WorkspaceLeft => "workspace_left",
            Self::WorkspaceDeleted => "workspace_deleted",
            Self::MemberRemoved => "member_removed",
        }
    }

    /// Returns the entity tag conventionally paired with this event type.
    #[must_use]
    pub const fn entity(self) -> ActivityEntity {
        match self {
            Self::TaskCreated
            | Self::TaskUpdated
            | Self::TaskToggled
            | Self::TaskDeleted
            | Self::TasksBulkCompleted
            | Self::TasksBulkDeleted => ActivityEntity::Task,
            Self::WorkspaceCreated
            | Self::WorkspaceJoined
            | Self::WorkspaceLeft
            | Self::WorkspaceDeleted => ActivityEntity::Workspace,
            Self::MemberRemoved => ActivityEntity::Member,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ActivityType {
    type Error = ActivityDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
            .ok_or_else(|| ActivityDomainError::UnknownActivityType(value.to_owned()))
    }
}

/// Coarse entity tag used for fast filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityEntity {
    /// The event concerns tasks.
    Task,
    /// The event concerns the workspace itself.
    Workspace,
    /// The event concerns workspace membership.
    Member,
}

impl ActivityEntity {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Workspace => "workspace",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for ActivityEntity {
    type Error = ActivityDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "task" => Ok(Self::Task),
            "workspace" => Ok(Self::Workspace),
            "member" => Ok(Self::Member),
            _ => Err(ActivityDomainError::UnknownEntity(value.to_owned())),
        }
    }
}
