//! Discriminated outcomes of message mutations.

use crate::message::{domain::Message, validation::FieldErrors};
use serde::Serialize;
use std::fmt;

/// Reason reported when the target message does not exist in the
/// organization.
pub const NOT_FOUND_REASON: &str = "Message not found.";

/// Reason reported when the requested title is already used in the
/// organization.
pub const DUPLICATE_TITLE_REASON: &str = "A message with the same title already exists.";

/// Reason reported when an update targets an inactive message.
pub const INACTIVE_UPDATE_REASON: &str = "Cannot update an inactive message.";

/// Reason reported when a delete targets an inactive message.
pub const INACTIVE_DELETE_REASON: &str = "Cannot delete an inactive message.";

/// Result of a message operation that reached a business decision.
///
/// Every expected failure path is a variant here, so callers match
/// exhaustively instead of inspecting errors. Infrastructure failures are
/// reported separately as
/// [`MessageServiceError`](super::MessageServiceError).
///
/// Serializes adjacently tagged, e.g. `{"outcome":"conflict","detail":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum MessageOutcome {
    /// A new message was stored.
    Created(Message),
    /// The message was updated.
    Updated,
    /// The message was removed.
    Deleted,
    /// The referenced message does not exist in the organization.
    NotFound(String),
    /// A business rule rejected the request.
    Conflict(String),
    /// One or more request fields are invalid.
    ValidationError(FieldErrors),
}

impl MessageOutcome {
    /// Builds a [`MessageOutcome::NotFound`] with the given reason.
    #[must_use]
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound(reason.into())
    }

    /// Builds a [`MessageOutcome::Conflict`] with the given reason.
    #[must_use]
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict(reason.into())
    }

    /// Returns the payload-free discriminant.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Created(_) => OutcomeKind::Created,
            Self::Updated => OutcomeKind::Updated,
            Self::Deleted => OutcomeKind::Deleted,
            Self::NotFound(_) => OutcomeKind::NotFound,
            Self::Conflict(_) => OutcomeKind::Conflict,
            Self::ValidationError(_) => OutcomeKind::ValidationError,
        }
    }

    /// Returns `true` for `Created`, `Updated` and `Deleted`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated | Self::Deleted)
    }

    /// Returns the human-readable reason carried by `NotFound` and
    /// `Conflict`.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::NotFound(reason) | Self::Conflict(reason) => Some(reason),
            Self::Created(_) | Self::Updated | Self::Deleted | Self::ValidationError(_) => None,
        }
    }
}

/// Payload-free discriminant of [`MessageOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// See [`MessageOutcome::Created`].
    Created,
    /// See [`MessageOutcome::Updated`].
    Updated,
    /// See [`MessageOutcome::Deleted`].
    Deleted,
    /// See [`MessageOutcome::NotFound`].
    NotFound,
    /// See [`MessageOutcome::Conflict`].
    Conflict,
    /// See [`MessageOutcome::ValidationError`].
    ValidationError,
}

impl OutcomeKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::ValidationError => "validation_error",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
