//! When steps for due-date bucketing BDD scenarios.

use super::world::{DueDateWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskspace::task::services::{CreateTaskRequest, TaskPatch};

#[when(r#"a task "{label}" is created due "{due}""#)]
fn create_task(world: &mut DueDateWorld, label: String, due: String) {
    let request = CreateTaskRequest::new(label).with_due_date(due);
    match run_async(
        world
            .service
            .create(world.workspace, world.user, request, world.zone),
    ) {
        Ok(task) => world.last_task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
}

#[when("the task due date is cleared")]
fn clear_due_date(world: &mut DueDateWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let updated = run_async(world.service.update(
        world.workspace,
        world.user,
        task_id,
        TaskPatch::new().clear_due_date(),
        world.zone,
    ))
    .wrap_err("clear due date in scenario")?;
    world.last_task = Some(updated);
    Ok(())
}
