//! Given steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use eyre::WrapErr;
use missive::message::services::{CreateMessageRequest, MessageOutcome};
use rstest_bdd_macros::given;

#[given(r#"an existing message titled "{title}" with content "{content}""#)]
fn an_existing_message(
    world: &mut MessageWorld,
    title: String,
    content: String,
) -> Result<(), eyre::Report> {
    let request = CreateMessageRequest::new(title, content);
    let outcome = run_async(world.engine.create_message(world.organization_id, request))
        .wrap_err("create message for scenario")?;
    let MessageOutcome::Created(message) = outcome else {
        return Err(eyre::eyre!("expected created outcome, got {outcome:?}"));
    };
    world.current_message = Some(message);
    Ok(())
}
