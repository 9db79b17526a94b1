//! Diesel schema for task persistence.

diesel::table! {
    /// Workspace-scoped task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning workspace identifier.
        workspace_id -> Uuid,
        /// Creating user identifier.
        creator_id -> Uuid,
        /// Task label.
        label -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Priority (`low`, `medium`, `high`).
        #[max_length = 16]
        priority -> Varchar,
        /// Free-text category.
        category -> Text,
        /// Absolute due instant; `NULL` for legacy tasks.
        due_at -> Nullable<Timestamptz>,
        /// Ordered assignee identifiers.
        assignees -> Array<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
