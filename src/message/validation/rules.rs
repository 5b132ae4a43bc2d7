//! Individual field rule implementations.
//!
//! Each rule checks one raw request field and returns the violation message
//! when the field is invalid. [`validate_fields`] runs every rule and
//! collects the results.

use super::{FieldErrors, ValidationConfig};

/// Field name used for title violations.
pub const TITLE_FIELD: &str = "title";

/// Field name used for content violations.
pub const CONTENT_FIELD: &str = "content";

/// Checks that a title is non-blank and within the configured bounds.
///
/// Returns the violation message, or `None` when the title is valid.
#[must_use]
pub fn validate_title(title: &str, config: &ValidationConfig) -> Option<String> {
    if is_present_within(title, config.title_min_chars, config.title_max_chars) {
        return None;
    }
    Some(format!(
        "Title is required and must be between {} and {} characters.",
        config.title_min_chars, config.title_max_chars
    ))
}

/// Checks that content is non-blank and within the configured bounds.
///
/// Returns the violation message, or `None` when the content is valid.
#[must_use]
pub fn validate_content(content: &str, config: &ValidationConfig) -> Option<String> {
    if is_present_within(content, config.content_min_chars, config.content_max_chars) {
        return None;
    }
    Some(format!(
        "Content must be between {} and {} characters.",
        config.content_min_chars, config.content_max_chars
    ))
}

/// Validates both request fields independently.
///
/// # Examples
///
/// ```
/// use missive::message::validation::{
///     CONTENT_FIELD, TITLE_FIELD, ValidationConfig, validate_fields,
/// };
///
/// let errors = validate_fields("ab", "short", &ValidationConfig::default());
/// assert!(errors.contains_field(TITLE_FIELD));
/// assert!(errors.contains_field(CONTENT_FIELD));
/// ```
#[must_use]
pub fn validate_fields(title: &str, content: &str, config: &ValidationConfig) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) = validate_title(title, config) {
        errors.push(TITLE_FIELD, message);
    }

    if let Some(message) = validate_content(content, config) {
        errors.push(CONTENT_FIELD, message);
    }

    errors
}

fn is_present_within(value: &str, min: usize, max: usize) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    let length = value.chars().count();
    (min..=max).contains(&length)
}
