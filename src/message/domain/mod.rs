//! Domain model for organization-scoped messages.
//!
//! The message domain owns identity, ownership scope and lifecycle state of a
//! message record. Validation of raw request fields and all persistence
//! concerns live outside the domain boundary.

mod ids;
mod message;

pub use ids::{MessageId, OrganizationId};
pub use message::{Message, PersistedMessageData};
