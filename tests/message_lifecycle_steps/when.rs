//! When steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use eyre::WrapErr;
use missive::message::{
    domain::OrganizationId,
    services::{CreateMessageRequest, UpdateMessageRequest},
};
use rstest_bdd_macros::when;

#[when(r#"a message titled "{title}" with content "{content}" is submitted"#)]
fn submit_message(
    world: &mut MessageWorld,
    title: String,
    content: String,
) -> Result<(), eyre::Report> {
    let request = CreateMessageRequest::new(title, content);
    let outcome = run_async(world.engine.create_message(world.organization_id, request))
        .wrap_err("submit message")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("a duplicate of the message is submitted")]
fn submit_duplicate(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let existing = world.current_message()?;
    let request = CreateMessageRequest::new(existing.title(), existing.content());
    let outcome = run_async(world.engine.create_message(world.organization_id, request))
        .wrap_err("submit duplicate message")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the same title is submitted in another organization")]
fn submit_in_other_organization(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let existing = world.current_message()?;
    let request = CreateMessageRequest::new(existing.title(), existing.content());
    let outcome = run_async(world.engine.create_message(OrganizationId::new(), request))
        .wrap_err("submit message in another organization")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the message is deactivated with title "{title}" and content "{content}""#)]
fn deactivate_message(
    world: &mut MessageWorld,
    title: String,
    content: String,
) -> Result<(), eyre::Report> {
    apply_update(world, UpdateMessageRequest::new(title, content, false))
}

#[when(r#"the message is updated with title "{title}" and content "{content}""#)]
fn update_message(
    world: &mut MessageWorld,
    title: String,
    content: String,
) -> Result<(), eyre::Report> {
    apply_update(world, UpdateMessageRequest::new(title, content, true))
}

#[when("the message is deleted")]
fn delete_message(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let id = world.current_message()?.id();
    let outcome = run_async(world.engine.delete_message(world.organization_id, id))
        .wrap_err("delete message")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

fn apply_update(world: &mut MessageWorld, request: UpdateMessageRequest) -> Result<(), eyre::Report> {
    let id = world.current_message()?.id();
    let outcome = run_async(world.engine.update_message(world.organization_id, id, request))
        .wrap_err("update message")?;
    world.last_outcome = Some(outcome);
    Ok(())
}
