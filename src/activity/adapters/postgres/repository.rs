//! `PostgreSQL` activity log implementation.

use super::{
    models::{ActivityRow, NewActivityRow},
    schema::activity_events,
};
use crate::activity::{
    domain::{
        ActivityCursor, ActivityEntity, ActivityEvent, ActivityId, ActivityMeta, ActivityType,
        PersistedActivityData,
    },
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};
use crate::identity::domain::{UserId, WorkspaceId};
use crate::storage::{PgPool, get_conn_with, run_blocking_with};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::dsl::max;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Text;
use serde_json::Value;

/// `PostgreSQL`-backed activity log.
#[derive(Debug, Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ActivityRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ActivityRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection =
                    get_conn_with(&pool, ActivityRepositoryError::store_unavailable)?;
                f(&mut connection)
            },
            ActivityRepositoryError::store_unavailable,
        )
        .await
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn append(&self, event: &ActivityEvent) -> ActivityRepositoryResult<ActivityEvent> {
        let requested = event.clone();
        self.run_blocking(move |connection| {
            let event_id = requested.id();
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    let workspace_id = requested.workspace_id().into_inner();
                    // Serializes appends per workspace until commit.
                    diesel::sql_query(
                        "SELECT pg_advisory_xact_lock(hashtextextended($1::text, 0))",
                    )
                    .bind::<Text, _>(workspace_id.to_string())
                    .execute(tx)?;
                    let latest = activity_events::table
                        .filter(activity_events::workspace_id.eq(workspace_id))
                        .select(max(activity_events::created_at))
                        .first::<Option<DateTime<Utc>>>(tx)?;
                    let created_at =
                        ActivityEvent::next_created_at(requested.created_at(), latest);
                    let stored = requested.clone().stored_at(created_at);
                    diesel::insert_into(activity_events::table)
                        .values(&to_new_row(&stored))
                        .execute(tx)?;
                    Ok(stored)
                })
                .map_err(|err| map_append_error(err, event_id))
        })
        .await
    }

    async fn list(
        &self,
        workspace_id: WorkspaceId,
        before: Option<ActivityCursor>,
        limit: usize,
    ) -> ActivityRepositoryResult<Vec<ActivityEvent>> {
        let row_limit = i64::try_from(limit).map_err(ActivityRepositoryError::store_unavailable)?;
        self.run_blocking(move |connection| {
            let mut query = activity_events::table
                .select(ActivityRow::as_select())
                .filter(activity_events::workspace_id.eq(workspace_id.into_inner()))
                .into_boxed();
            if let Some(cursor) = before {
                query = query.filter(activity_events::created_at.lt(cursor.instant()));
            }
            let rows = query
                .order((activity_events::created_at.desc(), activity_events::id.desc()))
                .limit(row_limit)
                .load::<ActivityRow>(connection)
                .map_err(ActivityRepositoryError::store_unavailable)?;
            rows.into_iter().map(row_to_event).collect()
        })
        .await
    }
}

/// Primary-key constraint of `activity_events`.
const PRIMARY_KEY: &str = "activity_events_pkey";

fn map_append_error(err: DieselError, event_id: ActivityId) -> ActivityRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if info.constraint_name() == Some(PRIMARY_KEY) =>
        {
            ActivityRepositoryError::DuplicateEvent(event_id)
        }
        other => ActivityRepositoryError::store_unavailable(other),
    }
}

fn to_new_row(event: &ActivityEvent) -> NewActivityRow {
    NewActivityRow {
        id: event.id().into_inner(),
        workspace_id: event.workspace_id().into_inner(),
        actor_id: event.actor_id().into_inner(),
        activity_type: event.activity_type().as_str().to_owned(),
        entity: event.entity().as_str().to_owned(),
        meta: Value::Object(event.meta().clone()),
        created_at: event.created_at(),
    }
}

pub(super) fn row_to_event(row: ActivityRow) -> ActivityRepositoryResult<ActivityEvent> {
    let ActivityRow {
        id,
        workspace_id,
        actor_id,
        activity_type: persisted_type,
        entity: persisted_entity,
        meta: persisted_meta,
        created_at,
    } = row;
    let event_id = ActivityId::from_uuid(id);
    let corrupt = |reason: String| ActivityRepositoryError::CorruptRecord {
        id: event_id,
        reason,
    };

    let activity_type =
        ActivityType::try_from(persisted_type.as_str()).map_err(|err| corrupt(err.to_string()))?;
    let entity = ActivityEntity::try_from(persisted_entity.as_str())
        .map_err(|err| corrupt(err.to_string()))?;
    let meta = match persisted_meta {
        Value::Object(map) => map,
        Value::Null => ActivityMeta::new(),
        other => return Err(corrupt(format!("meta is not an object: {other}"))),
    };

    Ok(ActivityEvent::from_persisted(PersistedActivityData {
        id: event_id,
        workspace_id: WorkspaceId::from_uuid(workspace_id),
        actor_id: UserId::from_uuid(actor_id),
        activity_type,
        entity,
        meta,
        created_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::models::ActivityRow;
    use super::row_to_event;
    use crate::activity::domain::{ActivityEntity, ActivityType};
    use crate::activity::ports::ActivityRepositoryError;
    use crate::test_support::instant;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn row() -> ActivityRow {
        ActivityRow {
            id: uuid::Uuid::new_v4(),
            workspace_id: uuid::Uuid::new_v4(),
            actor_id: uuid::Uuid::new_v4(),
            activity_type: "task_deleted".to_owned(),
            entity: "task".to_owned(),
            meta: json!({ "label": "Old task" }),
            created_at: instant("2025-03-09T12:00:00.123Z"),
        }
    }

    #[rstest]
    fn row_maps_into_event(row: ActivityRow) {
        let event = row_to_event(row).expect("row should map");
        assert_eq!(event.activity_type(), ActivityType::TaskDeleted);
        assert_eq!(event.entity(), ActivityEntity::Task);
        assert_eq!(
            event.meta().get("label"),
            Some(&Value::String("Old task".to_owned()))
        );
    }

    #[rstest]
    fn null_meta_becomes_empty_object(mut row: ActivityRow) {
        row.meta = Value::Null;
        let event = row_to_event(row).expect("row should map");
        assert!(event.meta().is_empty());
    }

    #[rstest]
    fn unknown_type_is_reported_as_corrupt(mut row: ActivityRow) {
        row.activity_type = "task_exploded".to_owned();
        assert!(matches!(
            row_to_event(row),
            Err(ActivityRepositoryError::CorruptRecord { .. })
        ));
    }
}
