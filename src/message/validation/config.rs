//! Configurable bounds for message field rules.

use serde::Deserialize;

/// Character bounds applied to message titles and content.
///
/// Lengths are inclusive and counted in Unicode scalar values. Hosts can load
/// the bounds from a configuration file; any omitted key keeps its default.
///
/// # Examples
///
/// ```
/// use missive::message::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.title_min_chars, 3);
/// assert_eq!(config.content_max_chars, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum title length.
    pub title_min_chars: usize,
    /// Maximum title length.
    pub title_max_chars: usize,
    /// Minimum content length.
    pub content_min_chars: usize,
    /// Maximum content length.
    pub content_max_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            title_min_chars: 3,
            title_max_chars: 200,
            content_min_chars: 10,
            content_max_chars: 1000,
        }
    }
}
