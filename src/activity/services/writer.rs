//! Append-only activity writer.

use super::ActivityLogResult;
use crate::activity::{
    domain::{ActivityEntity, ActivityEvent, ActivityMeta, ActivityType, NewActivity},
    ports::ActivityRepository,
};
use crate::identity::domain::{UserId, WorkspaceId};
use mockable::Clock;
use std::sync::Arc;

/// Writes activity events; exposes no update or delete.
#[derive(Clone)]
pub struct ActivityWriter<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> ActivityWriter<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new writer.
    #[must_use]
    pub const fn new(repository: Arc<A>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Appends one event and returns it as stored, carrying the creation
    /// instant the store assigned.
    ///
    /// Missing metadata is stored as an empty object, never as null.
    ///
    /// # Errors
    ///
    /// Returns [`super::ActivityLogError::Repository`] when the write fails.
    #[tracing::instrument(
        skip_all,
        fields(workspace_id = %workspace_id, actor_id = %actor_id, activity_type = %activity_type)
    )]
    pub async fn append(
        &self,
        workspace_id: WorkspaceId,
        actor_id: UserId,
        activity_type: ActivityType,
        entity: ActivityEntity,
        meta: Option<ActivityMeta>,
    ) -> ActivityLogResult<ActivityEvent> {
        let event = ActivityEvent::record(
            NewActivity {
                workspace_id,
                actor_id,
                activity_type,
                entity,
                meta: meta.unwrap_or_default(),
            },
            &*self.clock,
        );
        let stored = self.repository.append(&event).await?;
        tracing::debug!(
            activity_id = %stored.id(),
            created_at = %stored.created_at(),
            "activity appended"
        );
        Ok(stored)
    }
}
