//! In-memory integration tests for day bucketing and task mutations.

use super::helpers::{Workspace, instant, workspace};
use chrono::TimeDelta;
use chrono_tz::{America, Asia, Tz};
use rstest::rstest;
use taskspace::{
    calendar::TimezoneResolver,
    task::{
        domain::{Task, TaskId, TaskView},
        services::{CreateTaskRequest, TaskPatch},
    },
};

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn spring_forward_day_in_new_york_is_twenty_three_hours(workspace: Workspace) {
    let zone = America::New_York;
    let before_gap = workspace
        .tasks
        .create(
            workspace.id,
            workspace.owner,
            CreateTaskRequest::new("Early").with_due_date("2025-03-09T01:30:00"),
            zone,
        )
        .await
        .expect("create early task");
    let in_gap = workspace
        .tasks
        .create(
            workspace.id,
            workspace.owner,
            CreateTaskRequest::new("Gap").with_due_date("2025-03-09T02:30:00"),
            zone,
        )
        .await
        .expect("create gap task");
    let late = workspace
        .tasks
        .create(
            workspace.id,
            workspace.owner,
            CreateTaskRequest::new("Late").with_due_date("2025-03-09"),
            zone,
        )
        .await
        .expect("create late task");

    assert_eq!(before_gap.due_at(), Some(instant("2025-03-09T06:30:00Z")));
    assert_eq!(in_gap.due_at(), Some(instant("2025-03-09T07:00:00Z")));
    assert_eq!(late.due_at(), Some(instant("2025-03-10T03:59:59.999Z")));

    let listed = workspace
        .tasks
        .list_for_day(workspace.id, "2025-03-09", zone)
        .await
        .expect("list spring-forward day");
    let mut listed_ids = ids(&listed);
    listed_ids.sort_by_key(ToString::to_string);
    let mut expected = vec![before_gap.id(), in_gap.id(), late.id()];
    expected.sort_by_key(ToString::to_string);
    assert_eq!(listed_ids, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ambiguous_fall_back_time_uses_the_earlier_instant(workspace: Workspace) {
    let task = workspace
        .tasks
        .create(
            workspace.id,
            workspace.owner,
            CreateTaskRequest::new("Twice").with_due_date("2025-11-02T01:30:00"),
            America::New_York,
        )
        .await
        .expect("create task");

    assert_eq!(task.due_at(), Some(instant("2025-11-02T05:30:00Z")));
}

#[rstest]
#[case(America::Mexico_City, "2025-03-09")]
#[case(America::New_York, "2025-03-09")]
#[case(Asia::Tokyo, "2025-03-10")]
#[tokio::test(flavor = "multi_thread")]
async fn default_due_date_lands_on_callers_today(
    workspace: Workspace,
    #[case] zone: Tz,
    #[case] today: &str,
) {
    let task = workspace
        .tasks
        .create(workspace.id, workspace.owner, CreateTaskRequest::new("Today"), zone)
        .await
        .expect("create task");

    let listed = workspace
        .tasks
        .list_for_day(workspace.id, today, zone)
        .await
        .expect("list today");
    assert_eq!(ids(&listed), vec![task.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn day_may_be_given_as_an_instant(workspace: Workspace) {
    let task = workspace
        .tasks
        .create(
            workspace.id,
            workspace.owner,
            CreateTaskRequest::new("Instant day").with_due_date("2025-03-09"),
            America::Mexico_City,
        )
        .await
        .expect("create task");

    // 04:00Z on the 10th is still the 9th in Mexico City.
    let listed = workspace
        .tasks
        .list_for_day(workspace.id, "2025-03-10T04:00:00Z", America::Mexico_City)
        .await
        .expect("list by instant");
    assert_eq!(ids(&listed), vec![task.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_zone_header_falls_back_to_default(workspace: Workspace) {
    let resolver = TimezoneResolver::default();
    let zone = resolver.resolve(Some("Not/AZone"));
    assert_eq!(zone, America::Mexico_City);

    let task = workspace
        .tasks
        .create(
            workspace.id,
            workspace.owner,
            CreateTaskRequest::new("Fallback").with_due_date("2025-03-09"),
            zone,
        )
        .await
        .expect("create task");
    assert_eq!(task.due_at(), Some(instant("2025-03-10T05:59:59.999Z")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_a_due_date_moves_the_task_between_days(workspace: Workspace) {
    let zone = America::Mexico_City;
    let task = workspace
        .tasks
        .create(workspace.id, workspace.owner, CreateTaskRequest::new("Move me"), zone)
        .await
        .expect("create task");
    workspace.clock.advance(TimeDelta::minutes(10));

    let moved = workspace
        .tasks
        .update(
            workspace.id,
            workspace.owner,
            task.id(),
            TaskPatch::new().with_due_date("2025-03-12"),
            zone,
        )
        .await
        .expect("move task");

    let old_day = workspace
        .tasks
        .list_for_day(workspace.id, "2025-03-09", zone)
        .await
        .expect("list old day");
    let new_day = workspace
        .tasks
        .list_for_day(workspace.id, "2025-03-12", zone)
        .await
        .expect("list new day");
    assert!(old_day.is_empty());
    assert_eq!(ids(&new_day), vec![task.id()]);
    assert_eq!(moved.updated_at(), instant("2025-03-10T03:10:00Z"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_view_is_the_external_shape(workspace: Workspace) {
    let task = workspace
        .tasks
        .create(
            workspace.id,
            workspace.owner,
            CreateTaskRequest::new("Shape").with_due_date("2025-03-09"),
            America::Mexico_City,
        )
        .await
        .expect("create task");
    let cleared = workspace
        .tasks
        .update(
            workspace.id,
            workspace.owner,
            task.id(),
            TaskPatch::new().clear_due_date(),
            America::Mexico_City,
        )
        .await
        .expect("clear due date");

    let with_due = serde_json::to_value(TaskView::from(&task)).expect("serialize view");
    let without_due = serde_json::to_value(TaskView::from(&cleared)).expect("serialize view");

    assert_eq!(with_due["dueAt"], "2025-03-10T05:59:59.999Z");
    assert_eq!(with_due["createdBy"], workspace.owner.to_string());
    assert_eq!(without_due["dueAt"], serde_json::Value::Null);
    assert_eq!(
        without_due["assignees"],
        serde_json::json!([workspace.owner.to_string()])
    );
}
