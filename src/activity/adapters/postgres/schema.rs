//! Diesel schema for the activity log.

diesel::table! {
    /// Append-only activity events; rows are never updated.
    activity_events (id) {
        /// Event identifier.
        id -> Uuid,
        /// Workspace scope.
        workspace_id -> Uuid,
        /// Acting user.
        actor_id -> Uuid,
        /// Event type tag.
        #[max_length = 64]
        activity_type -> Varchar,
        /// Entity tag.
        #[max_length = 32]
        entity -> Varchar,
        /// Display payload.
        meta -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
