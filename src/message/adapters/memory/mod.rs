//! In-memory implementations of the message ports.

mod repository;

pub use repository::InMemoryMessageRepository;
