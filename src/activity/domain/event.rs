//! Immutable activity event.

use super::{ActivityEntity, ActivityId, ActivityType};
use crate::identity::domain::{UserId, WorkspaceId};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Smallest gap between two creation instants of one workspace.
const CREATED_AT_STEP: TimeDelta = TimeDelta::milliseconds(1);

/// Schema-less display payload attached to an event.
///
/// Keys vary per event type (`taskId`, `label`, `count`, `fields`, ...) and
/// are never branched on by core logic.
pub type ActivityMeta = Map<String, Value>;

/// Activity event; immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    id: ActivityId,
    workspace_id: WorkspaceId,
    actor_id: UserId,
    activity_type: ActivityType,
    entity: ActivityEntity,
    meta: ActivityMeta,
    created_at: DateTime<Utc>,
}

/// Parameter object for appending an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    /// Workspace scope.
    pub workspace_id: WorkspaceId,
    /// Acting user.
    pub actor_id: UserId,
    /// Event type.
    pub activity_type: ActivityType,
    /// Entity tag.
    pub entity: ActivityEntity,
    /// Display payload.
    pub meta: ActivityMeta,
}

/// Parameter object for reconstructing a persisted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedActivityData {
    /// Persisted identifier.
    pub id: ActivityId,
    /// Persisted workspace scope.
    pub workspace_id: WorkspaceId,
    /// Persisted actor.
    pub actor_id: UserId,
    /// Persisted event type.
    pub activity_type: ActivityType,
    /// Persisted entity tag.
    pub entity: ActivityEntity,
    /// Persisted payload.
    pub meta: ActivityMeta,
    /// Persisted creation instant.
    pub created_at: DateTime<Utc>,
}

impl ActivityEvent {
    /// Records a new event at the current clock time.
    ///
    /// The creation instant is truncated to milliseconds so that its ISO
    /// rendering, used as the pagination cursor, round-trips exactly. It is
    /// only a request: the store settles the final instant on append, see
    /// [`ActivityEvent::next_created_at`].
    #[must_use]
    pub fn record(data: NewActivity, clock: &impl Clock) -> Self {
        Self {
            id: ActivityId::new(),
            workspace_id: data.workspace_id,
            actor_id: data.actor_id,
            activity_type: data.activity_type,
            entity: data.entity,
            meta: data.meta,
            created_at: clock.utc().trunc_subsecs(3),
        }
    }

    /// Returns the instant a store assigns to an event appended after
    /// `latest`, the newest instant already stored in the same workspace.
    ///
    /// Instants are strictly increasing per workspace, one millisecond apart
    /// at least, so no two events share a cursor value.
    #[must_use]
    pub fn next_created_at(
        requested: DateTime<Utc>,
        latest: Option<DateTime<Utc>>,
    ) -> DateTime<Utc> {
        let wanted = requested.trunc_subsecs(3);
        match latest {
            Some(newest) if wanted <= newest => newest.trunc_subsecs(3) + CREATED_AT_STEP,
            _ => wanted,
        }
    }

    /// Returns the event with its creation instant replaced by the one the
    /// store assigned.
    #[must_use]
    pub fn stored_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Reconstructs an event from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedActivityData) -> Self {
        Self {
            id: data.id,
            workspace_id: data.workspace_id,
            actor_id: data.actor_id,
            activity_type: data.activity_type,
            entity: data.entity,
            meta: data.meta,
            created_at: data.created_at,
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the workspace scope.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Returns the acting user.
    #[must_use]
    pub const fn actor_id(&self) -> UserId {
        self.actor_id
    }

    /// Returns the event type.
    #[must_use]
    pub const fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    /// Returns the entity tag.
    #[must_use]
    pub const fn entity(&self) -> ActivityEntity {
        self.entity
    }

    /// Returns the display payload.
    #[must_use]
    pub const fn meta(&self) -> &ActivityMeta {
        &self.meta
    }

    /// Returns the creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
