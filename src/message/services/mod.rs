//! Application services for organization-scoped messages.

mod outcome;
mod rule_engine;

pub use outcome::{
    DUPLICATE_TITLE_REASON, INACTIVE_DELETE_REASON, INACTIVE_UPDATE_REASON, MessageOutcome,
    NOT_FOUND_REASON, OutcomeKind,
};
pub use rule_engine::{
    CreateMessageRequest, MessageRuleEngine, MessageServiceError, MessageServiceResult,
    UpdateMessageRequest,
};
