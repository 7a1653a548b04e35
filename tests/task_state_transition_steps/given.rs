//! Given steps for task state transition BDD scenarios.

use super::world::TaskTransitionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::{
    access::domain::{Member, Role, UserId},
    task::domain::{TaskSnapshot, TaskStatus},
};

fn parse_role(role: &str) -> Result<Role, eyre::Report> {
    Role::try_from(role).map_err(|err| eyre::eyre!("invalid role in scenario: {err}"))
}

#[given(r#"a "{role}" named "{name}""#)]
fn member_named(
    world: &mut TaskTransitionWorld,
    role: String,
    name: String,
) -> Result<(), eyre::Report> {
    let id = UserId::new();
    world
        .directory
        .put_member(Member::new(id, parse_role(&role)?))
        .wrap_err("register member")?;
    world.members.insert(name, id);
    Ok(())
}

#[given(r#"an "{role}" named "{name}" reporting to "{manager}""#)]
fn member_reporting_to(
    world: &mut TaskTransitionWorld,
    role: String,
    name: String,
    manager: String,
) -> Result<(), eyre::Report> {
    let id = UserId::new();
    let manager_id = world.member(&manager)?;
    world
        .directory
        .put_member(Member::new(id, parse_role(&role)?).with_manager(manager_id))
        .wrap_err("register reporting member")?;
    world.members.insert(name, id);
    Ok(())
}

#[given(r#""{name}" is a "{role}" reporting to "{manager}""#)]
fn named_member_reporting_to(
    world: &mut TaskTransitionWorld,
    name: String,
    role: String,
    manager: String,
) -> Result<(), eyre::Report> {
    member_reporting_to(world, role, name, manager)
}

#[given(r#"a task owned by "{owner}" in status "{status}""#)]
fn task_owned_by(
    world: &mut TaskTransitionWorld,
    owner: String,
    status: String,
) -> Result<(), eyre::Report> {
    let owner_id = world.member(&owner)?;
    let status_value = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = TaskSnapshot::new(owner_id, owner_id).with_status(status_value);
    world
        .directory
        .put_task(task.clone())
        .wrap_err("store scenario task")?;
    world.task = Some(task);
    Ok(())
}

#[given(r#"the reason "{reason}""#)]
fn the_reason(world: &mut TaskTransitionWorld, reason: String) {
    world.reason = Some(reason);
}

#[given(r#"the on-hold reason "{reason}""#)]
fn the_on_hold_reason(world: &mut TaskTransitionWorld, reason: String) {
    world.on_hold_reason = Some(reason);
}
