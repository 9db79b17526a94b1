//! Shared world state for due-date bucketing BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskspace::{
    activity::adapters::memory::InMemoryActivityRepository,
    calendar::{TimezoneResolver, Tz},
    clock::ManualClock,
    identity::domain::{UserId, WorkspaceId},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{TaskService, TaskServiceError},
    },
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskService<InMemoryTaskRepository, InMemoryActivityRepository, ManualClock>;

/// Scenario world for due-date behaviour tests.
pub struct DueDateWorld {
    pub service: TestTaskService,
    pub clock: Arc<ManualClock>,
    pub resolver: TimezoneResolver,
    pub zone: Tz,
    pub workspace: WorkspaceId,
    pub user: UserId,
    pub last_task: Option<Task>,
    pub last_error: Option<TaskServiceError>,
}

impl DueDateWorld {
    /// Creates a world with an empty workspace and the default zone.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(ManualClock::default());
        let resolver = TimezoneResolver::default();
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryActivityRepository::new()),
            Arc::clone(&clock),
        );

        Self {
            service,
            clock,
            resolver,
            zone: resolver.fallback(),
            workspace: WorkspaceId::new(),
            user: UserId::new(),
            last_task: None,
            last_error: None,
        }
    }

    /// Returns the task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for DueDateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DueDateWorld {
    DueDateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
