//! Message aggregate root.

use super::{MessageId, OrganizationId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Message aggregate root.
///
/// Identity, owning organization and creation time are fixed at construction.
/// Title, content and the active flag change only through
/// [`Message::apply_update`], which also stamps `updated_at`. Stored
/// records are rebuilt through [`Message::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    organization_id: OrganizationId,
    title: String,
    content: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMessageData {
    /// Persisted message identifier.
    pub id: MessageId,
    /// Persisted owning organization.
    pub organization_id: OrganizationId,
    /// Persisted title.
    pub title: String,
    /// Persisted body text.
    pub content: String,
    /// Persisted active flag.
    pub is_active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp, if the message was ever updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a new active message owned by `organization_id`.
    ///
    /// Field rules are not checked here; callers validate request input
    /// before constructing the aggregate.
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        title: impl Into<String>,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: MessageId::new(),
            organization_id,
            title: title.into(),
            content: content.into(),
            is_active: true,
            created_at: clock.utc(),
            updated_at: None,
        }
    }

    /// Reconstructs a message from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        Self {
            id: data.id,
            organization_id: data.organization_id,
            title: data.title,
            content: data.content,
            is_active: data.is_active,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` while the message accepts updates and deletion.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp, or `None` for a never-updated
    /// message.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces the mutable fields and stamps `updated_at`.
    pub fn apply_update(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        is_active: bool,
        clock: &impl Clock,
    ) {
        self.title = title.into();
        self.content = content.into();
        self.is_active = is_active;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc());
    }
}
