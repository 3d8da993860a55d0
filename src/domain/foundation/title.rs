//! Title value object for human-readable entity names.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum length for a title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Human-readable title, non-empty and bounded in length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a title, validating the raw value.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        // Length is in characters, not bytes.
        let length = trimmed.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long(
                "title",
                MAX_TITLE_LENGTH,
                length,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_title() {
        let title = Title::new("Quarterly Report").unwrap();
        assert_eq!(title.as_str(), "Quarterly Report");
    }

    #[test]
    fn rejects_empty() {
        assert!(Title::new("").is_err());
        assert!(Title::new("   ").is_err());
    }

    #[test]
    fn rejects_too_long() {
        let raw = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert!(matches!(
            Title::new(raw),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        // 300 two-byte characters: well under the limit in characters
        let title = Title::new("ü".repeat(300)).unwrap();
        assert_eq!(title.as_str().chars().count(), 300);

        assert!(matches!(
            Title::new("ü".repeat(MAX_TITLE_LENGTH + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn trims_whitespace() {
        let title = Title::new("  Spaced  ").unwrap();
        assert_eq!(title.as_str(), "Spaced");
    }
}
