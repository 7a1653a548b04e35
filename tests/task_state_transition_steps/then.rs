//! Then steps for task state transition BDD scenarios.

use super::world::TaskTransitionWorld;
use rstest_bdd_macros::then;
use taskboard::task::services::TaskWorkflowError;

#[then("the transition is allowed")]
fn transition_is_allowed(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    let result = world.result()?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected transition to be allowed, got {err}"));
    }
    Ok(())
}

#[then("the transition is a reviewer decision")]
fn transition_is_reviewer_decision(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    match world.result()? {
        Ok(decision) if decision.requires_manager_approval => Ok(()),
        other => Err(eyre::eyre!("expected a reviewer decision, got {other:?}")),
    }
}

#[then("the transition requires a reason")]
fn transition_requires_reason(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    match world.result()? {
        Ok(decision) if decision.requires_reason => Ok(()),
        other => Err(eyre::eyre!("expected a reason-bearing decision, got {other:?}")),
    }
}

#[then(r#"the transition is rejected as "{kind}""#)]
fn transition_rejected_as(world: &TaskTransitionWorld, kind: String) -> Result<(), eyre::Report> {
    match world.result()? {
        Err(TaskWorkflowError::Transition(err)) if format!("{:?}", err.kind()) == kind => Ok(()),
        other => Err(eyre::eyre!("expected {kind} rejection, got {other:?}")),
    }
}

#[then("the transition fails with an invalid status error")]
fn transition_fails_with_invalid_status(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    let result = world.result()?;
    if !matches!(result, Err(TaskWorkflowError::InvalidStatus(_))) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}
