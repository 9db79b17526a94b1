//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rstest::fixture;
use taskspace::{
    activity::{adapters::memory::InMemoryActivityRepository, services::ActivityReader},
    clock::ManualClock,
    identity::{
        adapters::memory::InMemoryUserDirectory,
        domain::{UserId, UserProfile, WorkspaceId},
    },
    task::{adapters::memory::InMemoryTaskRepository, services::TaskService},
};

/// Parses an RFC 3339 fixture instant.
///
/// # Panics
///
/// Panics when the fixture instant is malformed.
#[must_use]
pub fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid RFC 3339 fixture instant")
        .with_timezone(&Utc)
}

/// Task service wired to in-memory adapters.
pub type TestTaskService =
    TaskService<InMemoryTaskRepository, InMemoryActivityRepository, ManualClock>;

/// Activity reader wired to in-memory adapters.
pub type TestActivityReader = ActivityReader<InMemoryActivityRepository, InMemoryUserDirectory>;

/// Fully wired in-memory workspace shared by one test.
pub struct Workspace {
    pub tasks: TestTaskService,
    pub activity: TestActivityReader,
    pub directory: Arc<InMemoryUserDirectory>,
    pub clock: Arc<ManualClock>,
    pub id: WorkspaceId,
    pub owner: UserId,
}

/// Provides a workspace whose clock reads 2025-03-10T03:00:00Z, which is the
/// evening of 2025-03-09 in Mexico City and New York.
///
/// # Panics
///
/// Panics when the owner profile cannot be stored.
#[fixture]
pub fn workspace() -> Workspace {
    let task_repository = Arc::new(InMemoryTaskRepository::new());
    let activity_repository = Arc::new(InMemoryActivityRepository::new());
    let directory = Arc::new(InMemoryUserDirectory::new());
    let clock = Arc::new(ManualClock::new(instant("2025-03-10T03:00:00Z")));
    let owner = UserId::new();
    directory
        .insert(UserProfile::new(owner, "Grace").with_email("grace@example.com"))
        .expect("insert owner profile");

    Workspace {
        tasks: TaskService::new(
            task_repository,
            Arc::clone(&activity_repository),
            Arc::clone(&clock),
        ),
        activity: ActivityReader::new(activity_repository, Arc::clone(&directory)),
        directory,
        clock,
        id: WorkspaceId::new(),
        owner,
    }
}
