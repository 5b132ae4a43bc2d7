//! Port contracts for message storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the message rule
//! engine. Any backend that implements [`MessageRepository`] can replace the
//! in-memory reference store without touching the service layer.

pub mod repository;

#[cfg(test)]
pub use repository::MockMessageRepository;
pub use repository::{MessageRepository, MessageRepositoryError, MessageRepositoryResult};
