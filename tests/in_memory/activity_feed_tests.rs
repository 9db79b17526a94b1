//! In-memory integration tests for the activity feed produced by task
//! mutations.

use super::helpers::{Workspace, workspace};
use chrono::TimeDelta;
use chrono_tz::America;
use rstest::rstest;
use taskspace::{
    activity::domain::{ActivityEntity, ActivityType},
    identity::domain::{UserId, UserProfile},
    task::services::{CreateTaskRequest, TaskPatch},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::indexing_slicing,
    reason = "Test verifies length before access"
)]
async fn task_lifecycle_is_recorded_newest_first(workspace: Workspace) {
    let zone = America::Mexico_City;
    let task = workspace
        .tasks
        .create(workspace.id, workspace.owner, CreateTaskRequest::new("Audit me"), zone)
        .await
        .expect("create task");
    workspace.clock.advance(TimeDelta::seconds(1));
    workspace
        .tasks
        .update(
            workspace.id,
            workspace.owner,
            task.id(),
            TaskPatch::new().with_label("Audited"),
            zone,
        )
        .await
        .expect("update task");
    workspace.clock.advance(TimeDelta::seconds(1));
    workspace
        .tasks
        .update(
            workspace.id,
            workspace.owner,
            task.id(),
            TaskPatch::new().with_completed(true),
            zone,
        )
        .await
        .expect("toggle task");
    workspace.clock.advance(TimeDelta::seconds(1));
    workspace
        .tasks
        .remove(workspace.id, workspace.owner, task.id())
        .await
        .expect("remove task");

    let page = workspace
        .activity
        .list(workspace.id, None, None)
        .await
        .expect("list activity");

    let kinds: Vec<ActivityType> = page.items.iter().map(|item| item.activity_type).collect();
    assert_eq!(
        kinds,
        vec![
            ActivityType::TaskDeleted,
            ActivityType::TaskToggled,
            ActivityType::TaskUpdated,
            ActivityType::TaskCreated,
        ]
    );
    assert!(page.items.iter().all(|item| item.entity == ActivityEntity::Task));
    assert!(page.items.iter().all(|item| item.actor.name == "Grace"));
    assert_eq!(page.items[0].actor.email.as_deref(), Some("grace@example.com"));
    assert_eq!(page.items[2].meta["label"], "Audited");
    assert_eq!(page.items[3].meta["taskId"], task.id().to_string());
    assert!(page.next_cursor.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn departed_members_show_as_unknown(workspace: Workspace) {
    let guest = UserId::new();
    workspace
        .directory
        .insert(UserProfile::new(guest, "Temp"))
        .expect("insert guest");
    workspace
        .tasks
        .create(
            workspace.id,
            guest,
            CreateTaskRequest::new("Guest task"),
            America::Mexico_City,
        )
        .await
        .expect("create task");
    workspace.directory.remove(guest).expect("remove guest");

    let page = workspace
        .activity
        .list(workspace.id, Some(10), None)
        .await
        .expect("list activity");

    let names: Vec<&str> = page.items.iter().map(|item| item.actor.name.as_str()).collect();
    assert_eq!(names, vec!["Unknown"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn paging_through_a_busy_workspace_is_stable(workspace: Workspace) {
    let zone = America::Mexico_City;
    for index in 0..5 {
        workspace.clock.advance(TimeDelta::seconds(1));
        workspace
            .tasks
            .create(
                workspace.id,
                workspace.owner,
                CreateTaskRequest::new(format!("Task {index}")),
                zone,
            )
            .await
            .expect("create task");
    }

    let first = workspace
        .activity
        .list(workspace.id, Some(2), None)
        .await
        .expect("first page");
    workspace.clock.advance(TimeDelta::seconds(1));
    workspace
        .tasks
        .create(workspace.id, workspace.owner, CreateTaskRequest::new("Late"), zone)
        .await
        .expect("create late task");

    let mut labels: Vec<String> = first
        .items
        .iter()
        .map(|item| item.meta["label"].as_str().unwrap_or_default().to_owned())
        .collect();
    let mut cursor = first.next_cursor;
    while let Some(before) = cursor {
        let page = workspace
            .activity
            .list(workspace.id, Some(2), Some(&before))
            .await
            .expect("next page");
        labels.extend(
            page.items
                .iter()
                .map(|item| item.meta["label"].as_str().unwrap_or_default().to_owned()),
        );
        cursor = page.next_cursor;
    }

    assert_eq!(
        labels,
        vec!["Task 4", "Task 3", "Task 2", "Task 1", "Task 0"]
    );
}
