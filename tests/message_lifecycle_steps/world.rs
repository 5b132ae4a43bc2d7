//! Shared world state for message lifecycle BDD scenarios.

use std::sync::Arc;

use missive::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::{Message, OrganizationId},
    services::{MessageOutcome, MessageRuleEngine},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Rule engine type used by the BDD world.
pub type TestRuleEngine = MessageRuleEngine<InMemoryMessageRepository, DefaultClock>;

/// Scenario world for message lifecycle behaviour tests.
pub struct MessageWorld {
    /// The rule engine under test.
    pub engine: TestRuleEngine,
    /// Organization every scenario step acts in.
    pub organization_id: OrganizationId,
    /// Message created by the most recent successful setup step.
    pub current_message: Option<Message>,
    /// Outcome of the most recent operation.
    pub last_outcome: Option<MessageOutcome>,
}

impl MessageWorld {
    /// Creates a world with an empty store and a fresh organization.
    #[must_use]
    pub fn new() -> Self {
        let engine = MessageRuleEngine::new(
            Arc::new(InMemoryMessageRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            engine,
            organization_id: OrganizationId::new(),
            current_message: None,
            last_outcome: None,
        }
    }

    /// Returns the message created during setup.
    ///
    /// # Errors
    ///
    /// Returns an error when no message has been created yet.
    pub fn current_message(&self) -> Result<&Message, eyre::Report> {
        self.current_message
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no message in scenario world"))
    }

    /// Returns the outcome of the last operation.
    ///
    /// # Errors
    ///
    /// Returns an error when no operation has run yet.
    pub fn last_outcome(&self) -> Result<&MessageOutcome, eyre::Report> {
        self.last_outcome
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing outcome in scenario world"))
    }
}

impl Default for MessageWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageWorld {
    MessageWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
