//! When steps for task state transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::{domain::TaskSnapshot, services::TransitionTaskRequest};

#[when(r#""{actor}" requests the transition to "{target_status}""#)]
fn request_transition(
    world: &mut TaskTransitionWorld,
    actor: String,
    target_status: String,
) -> Result<(), eyre::Report> {
    let actor_id = world.member(&actor)?;
    let task_id = world
        .task
        .as_ref()
        .map(TaskSnapshot::id)
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let mut request = TransitionTaskRequest::new(task_id, actor_id, target_status);
    if let Some(reason) = world.reason.clone() {
        request = request.with_reason(reason);
    }
    if let Some(on_hold_reason) = world.on_hold_reason.clone() {
        request = request.with_on_hold_reason(on_hold_reason);
    }

    let result = run_async(world.service.check_transition(request));
    world.last_result = Some(result);
    Ok(())
}
