//! Repository port for organization-scoped message persistence.

use crate::message::domain::{Message, MessageId, OrganizationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageRepositoryResult<T> = Result<T, MessageRepositoryError>;

/// Message persistence contract.
///
/// Every lookup is scoped to one organization. Absence is reported as `None`
/// or `false`, never as an error; errors are reserved for infrastructure
/// failures and storage-level constraint violations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Finds a message by identifier within an organization.
    ///
    /// Returns `None` when the organization has no message with that id.
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<Option<Message>>;

    /// Finds a message by exact title within an organization.
    ///
    /// Inactive messages are included; titles in other organizations are
    /// never matched.
    async fn find_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> MessageRepositoryResult<Option<Message>>;

    /// Returns every message owned by the organization, in no particular
    /// order.
    async fn list_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> MessageRepositoryResult<Vec<Message>>;

    /// Stores a fully populated new message and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::DuplicateMessage`] when the id
    /// already exists, or [`MessageRepositoryError::DuplicateTitle`] when the
    /// backend enforces title uniqueness itself and the title is taken.
    async fn insert(&self, message: &Message) -> MessageRepositoryResult<Message>;

    /// Replaces the stored record matching the message id.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::NotFound`] when no record matches,
    /// or [`MessageRepositoryError::DuplicateTitle`] when the new title is
    /// held by another message in the organization.
    async fn update(&self, message: &Message) -> MessageRepositoryResult<Message>;

    /// Removes a message, returning `true` when a record existed.
    async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<bool>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    /// A message with the same identifier already exists.
    #[error("duplicate message identifier: {0}")]
    DuplicateMessage(MessageId),

    /// Another message in the organization already holds the title.
    #[error("duplicate title '{title}' in organization {organization_id}")]
    DuplicateTitle {
        /// Organization owning both records.
        organization_id: OrganizationId,
        /// The contested title.
        title: String,
    },

    /// The message was not found.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
