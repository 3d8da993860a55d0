//! ImageUrl value object for optional uploaded-image references.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum length for an image URL.
pub const MAX_URL_LENGTH: usize = 2000;

/// URL of an uploaded image, validated to carry an http(s) scheme.
///
/// Entity fields holding an image are optional; use
/// [`ImageUrl::optional`] at the boundary, which normalizes an absent
/// or empty raw value to `None` and validates everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Creates an image URL, validating the raw value.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("image_url"));
        }
        // Length is in characters, not bytes.
        let length = trimmed.chars().count();
        if length > MAX_URL_LENGTH {
            return Err(ValidationError::too_long(
                "image_url",
                MAX_URL_LENGTH,
                length,
            ));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ValidationError::invalid_format(
                "image_url",
                "must start with http:// or https://",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Builds an optional image URL from an optional raw value.
    ///
    /// `None` and empty strings normalize to `None` and bypass
    /// validation; any other value must be a valid URL.
    pub fn optional(raw: Option<String>) -> Result<Option<Self>, ValidationError> {
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => Self::new(s).map(Some),
        }
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
