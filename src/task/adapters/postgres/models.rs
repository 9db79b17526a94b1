//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning workspace identifier.
    pub workspace_id: uuid::Uuid,
    /// Creating user identifier.
    pub creator_id: uuid::Uuid,
    /// Task label.
    pub label: String,
    /// Completion flag.
    pub completed: bool,
    /// Priority.
    pub priority: String,
    /// Category.
    pub category: String,
    /// Due instant.
    pub due_at: Option<DateTime<Utc>>,
    /// Assignee identifiers.
    pub assignees: Vec<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning workspace identifier.
    pub workspace_id: uuid::Uuid,
    /// Creating user identifier.
    pub creator_id: uuid::Uuid,
    /// Task label.
    pub label: String,
    /// Completion flag.
    pub completed: bool,
    /// Priority.
    pub priority: String,
    /// Category.
    pub category: String,
    /// Due instant.
    pub due_at: Option<DateTime<Utc>>,
    /// Assignee identifiers.
    pub assignees: Vec<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update model; `None` fields are skipped.
///
/// `due_at` uses a nested option: `Some(None)` writes `NULL`, clearing the
/// due date.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New label.
    pub label: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
    /// New priority.
    pub priority: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// Due-date change.
    pub due_at: Option<Option<DateTime<Utc>>>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}
