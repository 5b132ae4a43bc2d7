//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use missive::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::{Message, OrganizationId},
    services::{CreateMessageRequest, MessageOutcome, MessageRuleEngine},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Rule engine wired to the in-memory store and the system clock.
pub type TestEngine = MessageRuleEngine<InMemoryMessageRepository, DefaultClock>;

/// Provides a rule engine over a fresh in-memory store.
#[fixture]
pub fn engine() -> TestEngine {
    MessageRuleEngine::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a fresh organization identifier.
#[fixture]
pub fn organization_id() -> OrganizationId {
    OrganizationId::new()
}

/// Creates a message and returns it.
///
/// # Errors
///
/// Returns an error when the store fails or the engine does not report
/// `Created`.
pub async fn create_message(
    engine: &TestEngine,
    organization_id: OrganizationId,
    title: &str,
    content: &str,
) -> Result<Message, Box<dyn std::error::Error + Send + Sync>> {
    let outcome = engine
        .create_message(organization_id, CreateMessageRequest::new(title, content))
        .await?;
    match outcome {
        MessageOutcome::Created(message) => Ok(message),
        other => Err(format!("expected created outcome, got {}", other.kind()).into()),
    }
}
