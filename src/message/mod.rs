//! Organization-scoped messages.
//!
//! Messages belong to exactly one organization, carry a title that is unique
//! within that organization, and can be updated or deleted only while active.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: the [`domain::Message`] aggregate and its identifiers
//! - **Validation**: pure field rules ([`validation::validate_fields`])
//! - **Ports**: the storage contract ([`ports::MessageRepository`])
//! - **Adapters**: the reference store
//!   ([`adapters::memory::InMemoryMessageRepository`])
//! - **Services**: the rule engine ([`services::MessageRuleEngine`]) that
//!   returns a [`services::MessageOutcome`] for every business decision
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use missive::message::{
//!     adapters::memory::InMemoryMessageRepository,
//!     domain::OrganizationId,
//!     services::{CreateMessageRequest, MessageOutcome, MessageRuleEngine},
//! };
//! use mockable::DefaultClock;
//!
//! # tokio::runtime::Builder::new_current_thread()
//! #     .build()
//! #     .expect("runtime")
//! #     .block_on(async {
//! let engine = MessageRuleEngine::new(
//!     Arc::new(InMemoryMessageRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//! let organization_id = OrganizationId::new();
//! let request = CreateMessageRequest::new("Launch Plan", "Draft content body text");
//!
//! let outcome = engine
//!     .create_message(organization_id, request)
//!     .await
//!     .expect("store is available");
//! assert!(matches!(outcome, MessageOutcome::Created(_)));
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
