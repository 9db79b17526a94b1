//! Diesel row models for the activity log.

use super::schema::activity_events;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for activity events.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activity_events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityRow {
    /// Event identifier.
    pub id: uuid::Uuid,
    /// Workspace scope.
    pub workspace_id: uuid::Uuid,
    /// Acting user.
    pub actor_id: uuid::Uuid,
    /// Event type tag.
    pub activity_type: String,
    /// Entity tag.
    pub entity: String,
    /// Display payload.
    pub meta: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for activity events.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activity_events)]
pub struct NewActivityRow {
    /// Event identifier.
    pub id: uuid::Uuid,
    /// Workspace scope.
    pub workspace_id: uuid::Uuid,
    /// Acting user.
    pub actor_id: uuid::Uuid,
    /// Event type tag.
    pub activity_type: String,
    /// Entity tag.
    pub entity: String,
    /// Display payload.
    pub meta: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
