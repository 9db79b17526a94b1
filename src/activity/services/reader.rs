//! Cursor-paginated activity reader with batched actor hydration.

use super::ActivityLogResult;
use crate::activity::{
    domain::{ActivityCursor, ActivityEntity, ActivityEvent, ActivityMeta, ActivityType, PageLimit},
    ports::ActivityRepository,
};
use crate::calendar::format_instant;
use crate::identity::{
    domain::{UserId, UserProfile, WorkspaceId},
    ports::UserDirectory,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Display record for the user behind an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSummary {
    /// Actor identifier.
    pub user_id: String,
    /// Display name, `"Unknown"` when the user no longer resolves.
    pub name: String,
    /// Optional last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Optional email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ActorSummary {
    /// Name shown for actors with no resolvable identity.
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Placeholder for an actor whose identity no longer resolves.
    #[must_use]
    pub fn unknown(user_id: UserId) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: Self::UNKNOWN_NAME.to_owned(),
            last_name: None,
            email: None,
        }
    }
}

impl From<&UserProfile> for ActorSummary {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.id.to_string(),
            name: profile.name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }
}

/// One hydrated activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    /// Event identifier.
    pub id: String,
    /// Workspace scope.
    pub workspace_id: String,
    /// Event type.
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Entity tag.
    pub entity: ActivityEntity,
    /// Display payload.
    pub meta: ActivityMeta,
    /// Hydrated actor.
    pub actor: ActorSummary,
    /// Creation instant (ISO-8601).
    pub created_at: String,
}

/// One page of the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPage {
    /// Events, newest first.
    pub items: Vec<ActivityItem>,
    /// Cursor for the next page, or `None` on the last page.
    pub next_cursor: Option<String>,
}

/// Reads a workspace's activity log.
#[derive(Clone)]
pub struct ActivityReader<A, D>
where
    A: ActivityRepository,
    D: UserDirectory,
{
    repository: Arc<A>,
    directory: Arc<D>,
}

impl<A, D> ActivityReader<A, D>
where
    A: ActivityRepository,
    D: UserDirectory,
{
    /// Creates a new reader.
    #[must_use]
    pub const fn new(repository: Arc<A>, directory: Arc<D>) -> Self {
        Self {
            repository,
            directory,
        }
    }

    /// Lists one page of a workspace's events, newest first.
    ///
    /// `limit` is clamped to `[1, 100]` (default 30). `before` is the
    /// `next_cursor` of the previous page; a blank cursor starts from the
    /// newest event.
    ///
    /// # Errors
    ///
    /// Returns [`super::ActivityLogError::Domain`] for a malformed cursor,
    /// before any query runs, and propagates storage or directory failures.
    #[tracing::instrument(
        skip_all,
        fields(workspace_id = %workspace_id, limit = ?limit, before = ?before)
    )]
    pub async fn list(
        &self,
        workspace_id: WorkspaceId,
        limit: Option<i64>,
        before: Option<&str>,
    ) -> ActivityLogResult<ActivityPage> {
        let cursor = before
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(ActivityCursor::parse)
            .transpose()?;
        let limit = PageLimit::clamp(limit);

        let mut events = self
            .repository
            .list(workspace_id, cursor, limit.fetch_size())
            .await?;
        let has_more = events.len() > limit.get();
        events.truncate(limit.get());

        let next_cursor = if has_more {
            events
                .last()
                .map(|event| ActivityCursor::from_instant(event.created_at()).to_string())
        } else {
            None
        };

        let actors = self.hydrate_actors(&events).await?;
        let items = events
            .into_iter()
            .map(|event| to_item(event, &actors))
            .collect();
        Ok(ActivityPage { items, next_cursor })
    }

    /// Resolves every distinct actor on the page with one directory call.
    async fn hydrate_actors(
        &self,
        events: &[ActivityEvent],
    ) -> ActivityLogResult<HashMap<UserId, ActorSummary>> {
        let mut actor_ids: Vec<UserId> = events.iter().map(ActivityEvent::actor_id).collect();
        actor_ids.sort_unstable();
        actor_ids.dedup();
        if actor_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let profiles = self.directory.find_many(&actor_ids).await?;
        Ok(profiles
            .iter()
            .map(|profile| (profile.id, ActorSummary::from(profile)))
            .collect())
    }
}

fn to_item(event: ActivityEvent, actors: &HashMap<UserId, ActorSummary>) -> ActivityItem {
    let actor = actors
        .get(&event.actor_id())
        .cloned()
        .unwrap_or_else(|| ActorSummary::unknown(event.actor_id()));
    ActivityItem {
        id: event.id().to_string(),
        workspace_id: event.workspace_id().to_string(),
        activity_type: event.activity_type(),
        entity: event.entity(),
        meta: event.meta().clone(),
        actor,
        created_at: format_instant(event.created_at()),
    }
}
