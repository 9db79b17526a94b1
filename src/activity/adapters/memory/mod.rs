//! In-memory activity log for tests and local wiring.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{ActivityCursor, ActivityEvent},
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};
use crate::identity::domain::WorkspaceId;

/// Thread-safe in-memory activity log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    events: Arc<RwLock<Vec<ActivityEvent>>>,
}

impl InMemoryActivityRepository {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored event in append order.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::StoreUnavailable`] when the lock is
    /// poisoned.
    pub fn snapshot(&self) -> ActivityRepositoryResult<Vec<ActivityEvent>> {
        let events = self.events.read().map_err(|err| {
            ActivityRepositoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(events.clone())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn append(&self, event: &ActivityEvent) -> ActivityRepositoryResult<ActivityEvent> {
        let mut events = self.events.write().map_err(|err| {
            ActivityRepositoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })?;
        if events.iter().any(|existing| existing.id() == event.id()) {
            return Err(ActivityRepositoryError::DuplicateEvent(event.id()));
        }
        let latest = events
            .iter()
            .filter(|existing| existing.workspace_id() == event.workspace_id())
            .map(ActivityEvent::created_at)
            .max();
        let stored = event
            .clone()
            .stored_at(ActivityEvent::next_created_at(event.created_at(), latest));
        events.push(stored.clone());
        Ok(stored)
    }

    async fn list(
        &self,
        workspace_id: WorkspaceId,
        before: Option<ActivityCursor>,
        limit: usize,
    ) -> ActivityRepositoryResult<Vec<ActivityEvent>> {
        let events = self.events.read().map_err(|err| {
            ActivityRepositoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })?;
        let mut page: Vec<ActivityEvent> = events
            .iter()
            .filter(|event| event.workspace_id() == workspace_id)
            .filter(|event| before.is_none_or(|cursor| event.created_at() < cursor.instant()))
            .cloned()
            .collect();
        page.sort_by_key(|event| (Reverse(event.created_at()), Reverse(event.id())));
        page.truncate(limit);
        Ok(page)
    }
}
