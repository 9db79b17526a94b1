//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::calendar::DayRange;
use crate::identity::domain::{UserId, WorkspaceId};
use crate::storage::{PgPool, get_conn_with, run_blocking_with};
use crate::task::{
    domain::{
        Assignees, Category, DueAtChange, PersistedTaskData, Priority, Task, TaskChanges, TaskId,
        TaskLabel,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection =
                    get_conn_with(&pool, TaskRepositoryError::store_unavailable)?;
                f(&mut connection)
            },
            TaskRepositoryError::store_unavailable,
        )
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::store_unavailable(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find(
        &self,
        workspace_id: WorkspaceId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::workspace_id.eq(workspace_id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::store_unavailable)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_for_day(
        &self,
        workspace_id: WorkspaceId,
        range: &DayRange,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let from = range.from();
        let until = range.until();
        self.run_blocking(move |connection| {
            let due_in_range = tasks::due_at.ge(from).and(tasks::due_at.lt(until));
            let legacy_created_in_range = tasks::due_at
                .is_null()
                .and(tasks::created_at.ge(from))
                .and(tasks::created_at.lt(until));
            let rows = tasks::table
                .filter(tasks::workspace_id.eq(workspace_id.into_inner()))
                .filter(due_in_range.or(legacy_created_in_range))
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::store_unavailable)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn apply_changes(
        &self,
        workspace_id: WorkspaceId,
        id: TaskId,
        changes: &TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        if changes.is_empty() {
            return self.find(workspace_id, id).await;
        }
        let changeset = to_changeset(changes, updated_at);
        self.run_blocking(move |connection| {
            let row = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::workspace_id.eq(workspace_id.into_inner())),
            )
            .set(&changeset)
            .returning(TaskRow::as_returning())
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::store_unavailable)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(
        &self,
        workspace_id: WorkspaceId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::workspace_id.eq(workspace_id.into_inner())),
            )
            .returning(TaskRow::as_returning())
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::store_unavailable)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete_completed(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                tasks::table
                    .filter(tasks::workspace_id.eq(workspace_id.into_inner()))
                    .filter(tasks::completed.eq(true)),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::store_unavailable)?;
            u64::try_from(deleted).map_err(TaskRepositoryError::store_unavailable)
        })
        .await
    }

    async fn delete_all(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(
                tasks::table.filter(tasks::workspace_id.eq(workspace_id.into_inner())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::store_unavailable)?;
            u64::try_from(deleted).map_err(TaskRepositoryError::store_unavailable)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        workspace_id: task.workspace_id().into_inner(),
        creator_id: task.creator_id().into_inner(),
        label: task.label().as_str().to_owned(),
        completed: task.completed(),
        priority: task.priority().as_str().to_owned(),
        category: task.category().as_str().to_owned(),
        due_at: task.due_at(),
        assignees: task
            .assignees()
            .as_slice()
            .iter()
            .map(|id| id.into_inner())
            .collect(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

pub(super) fn to_changeset(changes: &TaskChanges, updated_at: DateTime<Utc>) -> TaskChangeset {
    TaskChangeset {
        label: changes.label.as_ref().map(|label| label.as_str().to_owned()),
        completed: changes.completed,
        priority: changes.priority.map(|priority| priority.as_str().to_owned()),
        category: changes
            .category
            .as_ref()
            .map(|category| category.as_str().to_owned()),
        due_at: match changes.due_at {
            DueAtChange::Keep => None,
            DueAtChange::Clear => Some(None),
            DueAtChange::Set(due_at) => Some(Some(due_at)),
        },
        updated_at,
    }
}

pub(super) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        workspace_id,
        creator_id,
        label: persisted_label,
        completed,
        priority: persisted_priority,
        category,
        due_at,
        assignees,
        created_at,
        updated_at,
    } = row;
    let task_id = TaskId::from_uuid(id);
    let corrupt = |reason: String| TaskRepositoryError::CorruptRecord {
        id: task_id,
        reason,
    };

    let label = TaskLabel::new(&persisted_label).map_err(|err| corrupt(err.to_string()))?;
    let priority =
        Priority::try_from(persisted_priority.as_str()).map_err(|err| corrupt(err.to_string()))?;

    let data = PersistedTaskData {
        id: task_id,
        workspace_id: WorkspaceId::from_uuid(workspace_id),
        creator_id: UserId::from_uuid(creator_id),
        label,
        completed,
        priority,
        category: Category::new(category),
        due_at,
        assignees: Assignees::from_ids(assignees.into_iter().map(UserId::from_uuid)),
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
