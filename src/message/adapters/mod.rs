//! Storage adapters for the message module.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageRepository`]: thread-safe in-memory reference
//!   store keyed by organization and message id
//!
//! Durable backends implement [`MessageRepository`] in the same way and plug
//! into the rule engine unchanged.
//!
//! [`MessageRepository`]: crate::message::ports::MessageRepository

pub mod memory;
