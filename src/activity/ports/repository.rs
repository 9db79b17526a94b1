//! Repository port for the append-only activity log.

use crate::activity::domain::{ActivityCursor, ActivityEvent, ActivityId};
use crate::identity::domain::WorkspaceId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity repository operations.
pub type ActivityRepositoryResult<T> = Result<T, ActivityRepositoryError>;

/// Append-only activity persistence contract.
///
/// Implementations expose no update or delete: an event is written once and
/// only ever read back.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Appends one event and returns it as stored.
    ///
    /// The store settles the creation instant with
    /// [`ActivityEvent::next_created_at`] against the newest event of the same
    /// workspace, so instants are strictly increasing per workspace and a
    /// `created_at < cursor` page never skips an event.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::DuplicateEvent`] when the identifier
    /// already exists, or [`ActivityRepositoryError::StoreUnavailable`] when
    /// the write fails.
    async fn append(&self, event: &ActivityEvent) -> ActivityRepositoryResult<ActivityEvent>;

    /// Returns up to `limit` events of a workspace, newest first.
    ///
    /// With a cursor, only events created strictly before it are returned.
    async fn list(
        &self,
        workspace_id: WorkspaceId,
        before: Option<ActivityCursor>,
        limit: usize,
    ) -> ActivityRepositoryResult<Vec<ActivityEvent>>;
}

/// Errors returned by activity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRepositoryError {
    /// An event with the same identifier already exists.
    #[error("duplicate activity identifier: {0}")]
    DuplicateEvent(ActivityId),

    /// A persisted row could not be mapped back into the domain.
    #[error("corrupt activity record {id}: {reason}")]
    CorruptRecord {
        /// Identifier of the offending row.
        id: ActivityId,
        /// Mapping failure description.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("activity store unavailable: {0}")]
    StoreUnavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRepositoryError {
    /// Wraps a persistence error.
    pub fn store_unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StoreUnavailable(Arc::new(err))
    }
}
