//! Given steps for due-date bucketing BDD scenarios.

use super::world::DueDateWorld;
use chrono::{DateTime, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the clock reads "{now}""#)]
fn clock_reads(world: &mut DueDateWorld, now: String) -> Result<(), eyre::Report> {
    let instant = DateTime::parse_from_rfc3339(&now)
        .wrap_err("parse scenario clock instant")?
        .with_timezone(&Utc);
    world.clock.set(instant);
    Ok(())
}

#[given(r#"the caller timezone is "{zone}""#)]
fn caller_timezone(world: &mut DueDateWorld, zone: String) {
    world.zone = world.resolver.resolve(Some(&zone));
}
