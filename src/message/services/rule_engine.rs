//! Business-rule layer for organization-scoped messages.
//!
//! [`MessageRuleEngine`] turns raw requests into a [`MessageOutcome`]. The
//! order of checks is fixed for every mutation: existence, then active state,
//! then field validation, then uniqueness, then the mutating store call.

use super::outcome::{
    DUPLICATE_TITLE_REASON, INACTIVE_DELETE_REASON, INACTIVE_UPDATE_REASON, MessageOutcome,
    NOT_FOUND_REASON,
};
use crate::message::{
    domain::{Message, MessageId, OrganizationId},
    ports::{MessageRepository, MessageRepositoryError},
    validation::{ValidationConfig, validate_fields},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMessageRequest {
    title: String,
    content: String,
}

impl CreateMessageRequest {
    /// Creates a request from raw, unvalidated fields.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Request payload for replacing a message's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateMessageRequest {
    title: String,
    content: String,
    is_active: bool,
}

impl UpdateMessageRequest {
    /// Creates a request from raw, unvalidated fields.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, is_active: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            is_active,
        }
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the requested active flag.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Infrastructure failures surfaced by the rule engine.
///
/// Business failures never appear here; they are [`MessageOutcome`] values.
#[derive(Debug, Error)]
pub enum MessageServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MessageRepositoryError),
}

/// Result type for message service operations.
pub type MessageServiceResult<T> = Result<T, MessageServiceError>;

/// Message rule engine.
///
/// Owns validation, uniqueness and active-state rules; the repository only
/// stores what the engine has already decided to write.
#[derive(Clone)]
pub struct MessageRuleEngine<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: ValidationConfig,
}

impl<R, C> MessageRuleEngine<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    /// Creates an engine with the default field bounds.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, ValidationConfig::default())
    }

    /// Creates an engine with custom field bounds.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: ValidationConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the field bounds in effect.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Retrieves a message by identifier within an organization.
    ///
    /// Returns `Ok(None)` when the organization has no such message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when the lookup fails.
    pub async fn get_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageServiceResult<Option<Message>> {
        Ok(self.repository.find_by_id(organization_id, id).await?)
    }

    /// Returns every message owned by the organization.
    ///
    /// An empty list is a normal result; deciding whether it means "not
    /// found" is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when the lookup fails.
    pub async fn list_messages(
        &self,
        organization_id: OrganizationId,
    ) -> MessageServiceResult<Vec<Message>> {
        Ok(self.repository.list_by_organization(organization_id).await?)
    }

    /// Creates a message after validating fields and title uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when the store fails for a
    /// reason other than a title clash.
    pub async fn create_message(
        &self,
        organization_id: OrganizationId,
        request: CreateMessageRequest,
    ) -> MessageServiceResult<MessageOutcome> {
        debug!(%organization_id, "creating message");
        let CreateMessageRequest { title, content } = request;

        let errors = validate_fields(&title, &content, &self.config);
        if !errors.is_empty() {
            warn!(%organization_id, %errors, "message creation failed validation");
            return Ok(MessageOutcome::ValidationError(errors));
        }

        if self
            .repository
            .find_by_title(organization_id, &title)
            .await?
            .is_some()
        {
            warn!(%organization_id, "message creation rejected: duplicate title");
            return Ok(MessageOutcome::conflict(DUPLICATE_TITLE_REASON));
        }

        let message = Message::new(organization_id, title, content, &*self.clock);
        match self.repository.insert(&message).await {
            Ok(stored) => {
                info!(%organization_id, message_id = %stored.id(), "message created");
                Ok(MessageOutcome::Created(stored))
            }
            Err(MessageRepositoryError::DuplicateTitle { .. }) => {
                warn!(%organization_id, "message creation rejected by store: duplicate title");
                Ok(MessageOutcome::conflict(DUPLICATE_TITLE_REASON))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the title, content and active flag of an active message.
    ///
    /// A request carrying `is_active = false` deactivates the message; once
    /// inactive it accepts no further updates, so reactivation is not
    /// possible through this operation.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when the store fails for a
    /// reason other than a title clash or a vanished record.
    pub async fn update_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
        request: UpdateMessageRequest,
    ) -> MessageServiceResult<MessageOutcome> {
        debug!(%organization_id, message_id = %id, "updating message");
        let Some(mut message) = self.repository.find_by_id(organization_id, id).await? else {
            warn!(%organization_id, message_id = %id, "message update target not found");
            return Ok(MessageOutcome::not_found(NOT_FOUND_REASON));
        };

        if !message.is_active() {
            warn!(%organization_id, message_id = %id, "message update rejected: inactive");
            return Ok(MessageOutcome::conflict(INACTIVE_UPDATE_REASON));
        }

        let UpdateMessageRequest {
            title,
            content,
            is_active,
        } = request;

        let errors = validate_fields(&title, &content, &self.config);
        if !errors.is_empty() {
            warn!(%organization_id, message_id = %id, %errors, "message update failed validation");
            return Ok(MessageOutcome::ValidationError(errors));
        }

        if title != message.title()
            && self
                .repository
                .find_by_title(organization_id, &title)
                .await?
                .is_some()
        {
            warn!(%organization_id, message_id = %id, "message update rejected: duplicate title");
            return Ok(MessageOutcome::conflict(DUPLICATE_TITLE_REASON));
        }

        message.apply_update(title, content, is_active, &*self.clock);
        match self.repository.update(&message).await {
            Ok(_) => {
                info!(%organization_id, message_id = %id, is_active, "message updated");
                Ok(MessageOutcome::Updated)
            }
            Err(MessageRepositoryError::DuplicateTitle { .. }) => {
                warn!(%organization_id, message_id = %id, "message update rejected by store: duplicate title");
                Ok(MessageOutcome::conflict(DUPLICATE_TITLE_REASON))
            }
            Err(MessageRepositoryError::NotFound(_)) => {
                warn!(%organization_id, message_id = %id, "message vanished before update");
                Ok(MessageOutcome::not_found(NOT_FOUND_REASON))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes an active message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when the store fails.
    pub async fn delete_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageServiceResult<MessageOutcome> {
        debug!(%organization_id, message_id = %id, "deleting message");
        let Some(message) = self.repository.find_by_id(organization_id, id).await? else {
            warn!(%organization_id, message_id = %id, "message delete target not found");
            return Ok(MessageOutcome::not_found(NOT_FOUND_REASON));
        };

        if !message.is_active() {
            warn!(%organization_id, message_id = %id, "message delete rejected: inactive");
            return Ok(MessageOutcome::conflict(INACTIVE_DELETE_REASON));
        }

        if !self.repository.delete(organization_id, id).await? {
            warn!(%organization_id, message_id = %id, "message vanished before delete");
            return Ok(MessageOutcome::not_found(NOT_FOUND_REASON));
        }

        info!(%organization_id, message_id = %id, "message deleted");
        Ok(MessageOutcome::Deleted)
    }
}
