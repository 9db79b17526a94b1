//! In-memory repository for task tests and local wiring.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::calendar::DayRange;
use crate::identity::domain::WorkspaceId;
use crate::task::{
    domain::{Task, TaskChanges, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks across all workspaces.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` when no task is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.read().map_err(|err| {
            TaskRepositoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.write().map_err(|err| {
            TaskRepositoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })
    }
}

/// Removes every task in the workspace matching the predicate.
fn remove_where(
    tasks: &mut HashMap<TaskId, Task>,
    workspace_id: WorkspaceId,
    predicate: impl Fn(&Task) -> bool,
) -> u64 {
    let before = tasks.len();
    tasks.retain(|_, task| !(task.workspace_id() == workspace_id && predicate(task)));
    u64::try_from(before - tasks.len()).unwrap_or(u64::MAX)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find(
        &self,
        workspace_id: WorkspaceId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks
            .get(&id)
            .filter(|task| task.workspace_id() == workspace_id)
            .cloned())
    }

    async fn find_for_day(
        &self,
        workspace_id: WorkspaceId,
        range: &DayRange,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        let mut found: Vec<Task> = tasks
            .values()
            .filter(|task| task.workspace_id() == workspace_id && task.falls_on(range))
            .cloned()
            .collect();
        found.sort_by_key(|task| (Reverse(task.created_at()), Reverse(task.id().into_inner())));
        Ok(found)
    }

    async fn apply_changes(
        &self,
        workspace_id: WorkspaceId,
        id: TaskId,
        changes: &TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.write()?;
        let Some(task) = tasks
            .get_mut(&id)
            .filter(|task| task.workspace_id() == workspace_id)
        else {
            return Ok(None);
        };
        task.apply(changes, updated_at);
        Ok(Some(task.clone()))
    }

    async fn delete(
        &self,
        workspace_id: WorkspaceId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut tasks = self.write()?;
        let in_scope = tasks
            .get(&id)
            .is_some_and(|task| task.workspace_id() == workspace_id);
        if !in_scope {
            return Ok(None);
        }
        Ok(tasks.remove(&id))
    }

    async fn delete_completed(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<u64> {
        let mut tasks = self.write()?;
        Ok(remove_where(&mut tasks, workspace_id, Task::completed))
    }

    async fn delete_all(&self, workspace_id: WorkspaceId) -> TaskRepositoryResult<u64> {
        let mut tasks = self.write()?;
        Ok(remove_where(&mut tasks, workspace_id, |_| true))
    }
}
