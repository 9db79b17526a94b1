//! Task query and mutation service.

use super::{CreateTaskRequest, DueDatePatch, TaskPatch, TaskServiceError, TaskServiceResult};
use crate::activity::{
    domain::{ActivityEntity, ActivityMeta, ActivityType},
    ports::ActivityRepository,
    services::ActivityWriter,
};
use crate::calendar::{
    DayRange, Tz, end_of_today, format_instant, parse_due_date, resolve_calendar_day,
};
use crate::identity::domain::{UserId, WorkspaceId};
use crate::task::{
    domain::{Assignees, Category, DueAtChange, NewTask, Task, TaskChanges, TaskId, TaskLabel},
    ports::TaskRepository,
};
use chrono::SubsecRound;
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

/// Workspace-scoped task orchestration service.
///
/// Each successful mutation is followed by a best-effort activity append:
/// a failed append is logged and never undoes or fails the mutation.
#[derive(Clone)]
pub struct TaskService<R, A, C>
where
    R: TaskRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    activity: ActivityWriter<A, C>,
    clock: Arc<C>,
}

impl<R, A, C> TaskService<R, A, C>
where
    R: TaskRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub fn new(repository: Arc<R>, activity_repository: Arc<A>, clock: Arc<C>) -> Self {
        let activity = ActivityWriter::new(activity_repository, Arc::clone(&clock));
        Self {
            repository,
            activity,
            clock,
        }
    }

    /// Lists the tasks that fall on a calendar day in `zone`, newest first.
    ///
    /// `day` is a `YYYY-MM-DD` date or a point in time whose local date in
    /// `zone` is used. Tasks with a due date match on it; tasks without one
    /// match on their creation instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Calendar`] for malformed day input and
    /// propagates repository failures.
    #[tracing::instrument(skip(self), fields(workspace_id = %workspace_id, zone = %zone))]
    pub async fn list_for_day(
        &self,
        workspace_id: WorkspaceId,
        day: &str,
        zone: Tz,
    ) -> TaskServiceResult<Vec<Task>> {
        let range = DayRange::new(resolve_calendar_day(day, zone)?, zone)?;
        Ok(self.repository.find_for_day(workspace_id, &range).await?)
    }

    /// Returns one task of a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist in
    /// the workspace.
    pub async fn find(
        &self,
        workspace_id: WorkspaceId,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        self.repository
            .find(workspace_id, task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Creates a task.
    ///
    /// An explicit due date is normalized in `zone`; without one the task is
    /// due at the end of today in `zone`. Assignees default to the creator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Calendar`] for an unparseable due date,
    /// [`TaskServiceError::Domain`] for an empty label, and propagates
    /// repository failures. Nothing is written when validation fails.
    #[tracing::instrument(
        skip(self, request),
        fields(workspace_id = %workspace_id, creator_id = %creator_id, zone = %zone)
    )]
    pub async fn create(
        &self,
        workspace_id: WorkspaceId,
        creator_id: UserId,
        request: CreateTaskRequest,
        zone: Tz,
    ) -> TaskServiceResult<Task> {
        let label = TaskLabel::new(&request.label)?;
        let due_at = match request.due_date.as_deref() {
            Some(raw) => parse_due_date(raw, zone)?,
            None => end_of_today(zone, &*self.clock)?,
        };
        let assignees = match request.assignees {
            Some(raw) => Assignees::from_input(creator_id, raw),
            None => Assignees::creator_only(creator_id),
        };

        let task = Task::new(
            NewTask {
                workspace_id,
                creator_id,
                label,
                completed: request.completed,
                priority: request.priority.unwrap_or_default(),
                category: request.category.map(Category::new).unwrap_or_default(),
                due_at: Some(due_at),
                assignees,
            },
            &*self.clock,
        );
        self.repository.store(&task).await?;

        let mut meta = task_meta(&task);
        meta.insert("dueAt".to_owned(), Value::String(format_instant(due_at)));
        self.record(&task, creator_id, ActivityType::TaskCreated, meta)
            .await;
        Ok(task)
    }

    /// Applies a partial update.
    ///
    /// Absent fields are left untouched; a cleared due date reverts the task
    /// to creation-day bucketing. An empty patch is a no-op that returns the
    /// current task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Calendar`] or [`TaskServiceError::Domain`]
    /// for malformed input, [`TaskServiceError::NotFound`] when the task does
    /// not exist in the workspace, and propagates repository failures.
    #[tracing::instrument(
        skip(self, patch),
        fields(workspace_id = %workspace_id, task_id = %task_id, zone = %zone)
    )]
    pub async fn update(
        &self,
        workspace_id: WorkspaceId,
        actor_id: UserId,
        task_id: TaskId,
        patch: TaskPatch,
        zone: Tz,
    ) -> TaskServiceResult<Task> {
        let changes = resolve_patch(patch, zone)?;
        if changes.is_empty() {
            return self.find(workspace_id, task_id).await;
        }

        let updated_at = self.clock.utc().trunc_subsecs(3);
        let task = self
            .repository
            .apply_changes(workspace_id, task_id, &changes, updated_at)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;

        let mut meta = task_meta(&task);
        let activity_type = match changes.completed {
            Some(completed) => {
                meta.insert("completed".to_owned(), Value::Bool(completed));
                ActivityType::TaskToggled
            }
            None => ActivityType::TaskUpdated,
        };
        meta.insert(
            "fields".to_owned(),
            Value::Array(
                changes
                    .field_names()
                    .into_iter()
                    .map(|name| Value::String(name.to_owned()))
                    .collect(),
            ),
        );
        self.record(&task, actor_id, activity_type, meta).await;
        Ok(task)
    }

    /// Deletes one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist in
    /// the workspace, and propagates repository failures.
    #[tracing::instrument(skip(self), fields(workspace_id = %workspace_id, task_id = %task_id))]
    pub async fn remove(
        &self,
        workspace_id: WorkspaceId,
        actor_id: UserId,
        task_id: TaskId,
    ) -> TaskServiceResult<()> {
        let task = self
            .repository
            .delete(workspace_id, task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;
        self.record(&task, actor_id, ActivityType::TaskDeleted, task_meta(&task))
            .await;
        Ok(())
    }

    /// Deletes every completed task of a workspace and returns the count.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    #[tracing::instrument(skip(self), fields(workspace_id = %workspace_id))]
    pub async fn remove_completed(
        &self,
        workspace_id: WorkspaceId,
        actor_id: UserId,
    ) -> TaskServiceResult<u64> {
        let count = self.repository.delete_completed(workspace_id).await?;
        if count > 0 {
            let mut meta = ActivityMeta::new();
            meta.insert("count".to_owned(), Value::from(count));
            self.append_best_effort(workspace_id, actor_id, ActivityType::TasksBulkDeleted, meta)
                .await;
        }
        Ok(count)
    }

    /// Deletes every task of a workspace during teardown and returns the
    /// count; an empty workspace yields zero.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    #[tracing::instrument(skip(self), fields(workspace_id = %workspace_id))]
    pub async fn remove_all(&self, workspace_id: WorkspaceId) -> TaskServiceResult<u64> {
        let count = self.repository.delete_all(workspace_id).await?;
        tracing::info!(count, "workspace tasks removed");
        Ok(count)
    }

    async fn record(
        &self,
        task: &Task,
        actor_id: UserId,
        activity_type: ActivityType,
        meta: ActivityMeta,
    ) {
        self.append_best_effort(task.workspace_id(), actor_id, activity_type, meta)
            .await;
    }

    async fn append_best_effort(
        &self,
        workspace_id: WorkspaceId,
        actor_id: UserId,
        activity_type: ActivityType,
        meta: ActivityMeta,
    ) {
        let result = self
            .activity
            .append(
                workspace_id,
                actor_id,
                activity_type,
                ActivityEntity::Task,
                Some(meta),
            )
            .await;
        if let Err(err) = result {
            tracing::warn!(
                workspace_id = %workspace_id,
                actor_id = %actor_id,
                activity_type = %activity_type,
                error = %err,
                "activity append failed after task mutation; mutation kept"
            );
        }
    }
}

/// Validates a patch into a change set before anything is written.
fn resolve_patch(patch: TaskPatch, zone: Tz) -> TaskServiceResult<TaskChanges> {
    let label = patch.label.as_deref().map(TaskLabel::new).transpose()?;
    let due_at = match patch.due_date {
        DueDatePatch::Keep => DueAtChange::Keep,
        DueDatePatch::Clear => DueAtChange::Clear,
        DueDatePatch::Set(raw) => DueAtChange::Set(parse_due_date(&raw, zone)?),
    };
    Ok(TaskChanges {
        label,
        completed: patch.completed,
        priority: patch.priority,
        category: patch.category.map(Category::new),
        due_at,
    })
}

/// Display payload shared by single-task events.
fn task_meta(task: &Task) -> ActivityMeta {
    let mut meta = ActivityMeta::new();
    meta.insert("taskId".to_owned(), Value::String(task.id().to_string()));
    meta.insert(
        "label".to_owned(),
        Value::String(task.label().as_str().to_owned()),
    );
    meta
}
