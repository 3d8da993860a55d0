//! Slug value object - URL-safe natural key for content entities.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum length for a slug.
pub const MAX_SLUG_LENGTH: usize = 200;

/// URL-safe identifier used as a natural key (e.g. `company-update-2024`).
///
/// # Invariants
///
/// - Non-empty after trimming
/// - At most [`MAX_SLUG_LENGTH`] characters
/// - ASCII lowercase alphanumeric and `-` only
///
/// Validation runs once, at construction. A constructed slug is valid
/// for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Creates a slug, validating the raw value.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if trimmed.len() > MAX_SLUG_LENGTH {
            return Err(ValidationError::too_long("slug", MAX_SLUG_LENGTH, trimmed.len()));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::invalid_format(
                "slug",
                "only lowercase letters, digits and '-' are allowed",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
