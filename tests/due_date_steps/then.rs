//! Then steps for due-date bucketing BDD scenarios.

use super::world::{DueDateWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskspace::{
    calendar::format_instant,
    error::{ClassifiedError, FailureKind},
    task::domain::TaskId,
};

fn listed_ids(world: &DueDateWorld, day: &str) -> Result<Vec<TaskId>, eyre::Report> {
    let tasks = run_async(world.service.list_for_day(world.workspace, day, world.zone))
        .wrap_err("list tasks for scenario day")?;
    Ok(tasks.iter().map(taskspace::task::domain::Task::id).collect())
}

#[then(r#"the task is due at "{expected}""#)]
fn task_is_due_at(world: &DueDateWorld, expected: String) -> Result<(), eyre::Report> {
    let due = world
        .task()?
        .due_at()
        .ok_or_else(|| eyre::eyre!("task has no due date"))?;
    eyre::ensure!(
        format_instant(due) == expected,
        "expected due date {expected}, found {}",
        format_instant(due)
    );
    Ok(())
}

#[then("the task has no due date")]
fn task_has_no_due_date(world: &DueDateWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.task()?.due_at().is_none(), "task still has a due date");
    Ok(())
}

#[then(r#"the task is listed on "{day}""#)]
fn task_is_listed_on(world: &DueDateWorld, day: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let ids = listed_ids(world, &day)?;
    eyre::ensure!(ids.contains(&task_id), "task missing from {day}");
    Ok(())
}

#[then(r#"the task is not listed on "{day}""#)]
fn task_is_not_listed_on(world: &DueDateWorld, day: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let ids = listed_ids(world, &day)?;
    eyre::ensure!(!ids.contains(&task_id), "task unexpectedly listed on {day}");
    Ok(())
}

#[then("the request is rejected as invalid input")]
fn request_rejected(world: &DueDateWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the request to fail"))?;
    eyre::ensure!(
        err.failure_kind() == FailureKind::InvalidInput,
        "expected invalid input, found {err}"
    );
    Ok(())
}

#[then(r#"no task is listed on "{day}""#)]
fn no_task_listed(world: &DueDateWorld, day: String) -> Result<(), eyre::Report> {
    let ids = listed_ids(world, &day)?;
    eyre::ensure!(ids.is_empty(), "expected no tasks on {day}, found {}", ids.len());
    Ok(())
}
