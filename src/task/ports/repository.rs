//! Repository port for workspace-scoped task persistence.

use crate::calendar::DayRange;
use crate::identity::domain::WorkspaceId;
use crate::task::domain::{Task, TaskChanges, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every read and write is scoped by workspace: a task id that exists in
/// another workspace behaves exactly like a missing id.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier within a workspace.
    ///
    /// Returns `None` when the task does not exist in that workspace.
    async fn find(&self, workspace_id: WorkspaceId, id: TaskId)
    -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks that fall on the given day, newest first.
    ///
    /// A task matches when its due date lies in the range, or when it has no
    /// due date and its creation instant lies in the range.
    async fn find_for_day(
        &self,
        workspace_id: WorkspaceId,
        range: &DayRange,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Applies a partial update and returns the updated task.
    ///
    /// Only fields present in `changes` are written. Returns `None` when the
    /// task does not exist in that workspace.
    async fn apply_changes(
        &self,
        workspace_id: WorkspaceId,
        id: TaskId,
        changes: &TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes one task and returns it, or `None` when it does not exist in
    /// that workspace.
    async fn delete(&self, workspace_id: WorkspaceId, id: TaskId)
    -> TaskRepositoryResult<Option<Task>>;

    /// Deletes every completed task in a workspace and returns the count.
    async fn delete_completed(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<u64>;

    /// Deletes every task in a workspace and returns the count.
    async fn delete_all(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A persisted row could not be mapped back into the domain.
    #[error("corrupt task record {id}: {reason}")]
    CorruptRecord {
        /// Task identifier of the offending row.
        id: TaskId,
        /// Mapping failure description.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("task store unavailable: {0}")]
    StoreUnavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn store_unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StoreUnavailable(Arc::new(err))
    }
}
