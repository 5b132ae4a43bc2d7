//! In-memory reference store for organization-scoped messages.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::message::{
    domain::{Message, MessageId, OrganizationId},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};

/// Thread-safe in-memory message repository.
///
/// Records are partitioned by organization. Each partition keeps a title
/// index under the same lock as the records, so an insert or update that
/// would duplicate a title inside the organization is rejected with
/// [`MessageRepositoryError::DuplicateTitle`] even when two writers race past
/// the service-level check.
///
/// # Example
///
/// ```
/// use missive::message::adapters::memory::InMemoryMessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// let shared = repo.clone();
/// // Both handles see the same records.
/// # drop(shared);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    state: Arc<RwLock<InMemoryMessageState>>,
}

#[derive(Debug, Default)]
struct InMemoryMessageState {
    organizations: HashMap<OrganizationId, OrganizationPartition>,
}

#[derive(Debug, Default)]
struct OrganizationPartition {
    messages: HashMap<MessageId, Message>,
    title_index: HashMap<String, MessageId>,
}

impl InMemoryMessageRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> MessageRepositoryResult<RwLockReadGuard<'_, InMemoryMessageState>> {
        self.state.read().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> MessageRepositoryResult<RwLockWriteGuard<'_, InMemoryMessageState>> {
        self.state.write().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn duplicate_title(message: &Message) -> MessageRepositoryError {
    MessageRepositoryError::DuplicateTitle {
        organization_id: message.organization_id(),
        title: message.title().to_owned(),
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<Option<Message>> {
        let state = self.read()?;
        let message = state
            .organizations
            .get(&organization_id)
            .and_then(|partition| partition.messages.get(&id))
            .cloned();
        Ok(message)
    }

    async fn find_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> MessageRepositoryResult<Option<Message>> {
        let state = self.read()?;
        let message = state.organizations.get(&organization_id).and_then(|partition| {
            partition
                .title_index
                .get(title)
                .and_then(|id| partition.messages.get(id))
                .cloned()
        });
        Ok(message)
    }

    async fn list_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> MessageRepositoryResult<Vec<Message>> {
        let state = self.read()?;
        let messages = state
            .organizations
            .get(&organization_id)
            .map(|partition| partition.messages.values().cloned().collect())
            .unwrap_or_default();
        Ok(messages)
    }

    async fn insert(&self, message: &Message) -> MessageRepositoryResult<Message> {
        let mut state = self.write()?;
        let partition = state
            .organizations
            .entry(message.organization_id())
            .or_default();

        if partition.messages.contains_key(&message.id()) {
            return Err(MessageRepositoryError::DuplicateMessage(message.id()));
        }

        if partition.title_index.contains_key(message.title()) {
            return Err(duplicate_title(message));
        }

        partition
            .title_index
            .insert(message.title().to_owned(), message.id());
        partition.messages.insert(message.id(), message.clone());
        Ok(message.clone())
    }

    async fn update(&self, message: &Message) -> MessageRepositoryResult<Message> {
        let mut state = self.write()?;
        let partition = state
            .organizations
            .get_mut(&message.organization_id())
            .ok_or(MessageRepositoryError::NotFound(message.id()))?;

        let old_title = partition
            .messages
            .get(&message.id())
            .ok_or(MessageRepositoryError::NotFound(message.id()))?
            .title()
            .to_owned();

        if message.title() != old_title {
            if let Some(&indexed_id) = partition.title_index.get(message.title())
                && indexed_id != message.id()
            {
                return Err(duplicate_title(message));
            }
            partition.title_index.remove(&old_title);
            partition
                .title_index
                .insert(message.title().to_owned(), message.id());
        }

        partition.messages.insert(message.id(), message.clone());
        Ok(message.clone())
    }

    async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(partition) = state.organizations.get_mut(&organization_id) else {
            return Ok(false);
        };

        let Some(removed) = partition.messages.remove(&id) else {
            return Ok(false);
        };
        partition.title_index.remove(removed.title());

        if partition.messages.is_empty() {
            state.organizations.remove(&organization_id);
        }
        Ok(true)
    }
}
