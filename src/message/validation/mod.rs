//! Field validation for message requests.
//!
//! Rules are pure functions over raw request fields. They never stop at the
//! first failure: every field is checked and all violations are gathered into
//! a [`FieldErrors`] map keyed by field name.

mod config;
mod field_errors;
pub mod rules;

pub use config::ValidationConfig;
pub use field_errors::FieldErrors;
pub use rules::{CONTENT_FIELD, TITLE_FIELD, validate_fields};
