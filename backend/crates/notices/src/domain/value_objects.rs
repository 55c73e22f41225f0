//! Domain Value Objects

use std::fmt;
use thiserror::Error;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 100;

/// Validation errors for notice fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoticeValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must be at most {max} characters (got {actual})")]
    TitleTooLong { max: usize, actual: usize },

    #[error("Content cannot be empty")]
    EmptyContent,
}

/// Notice title, trimmed and bounded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeTitle(String);

impl NoticeTitle {
    pub fn new(raw: &str) -> Result<Self, NoticeValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(NoticeValidationError::EmptyTitle);
        }

        let char_count = trimmed.chars().count();
        if char_count > MAX_TITLE_LENGTH {
            return Err(NoticeValidationError::TitleTooLong {
                max: MAX_TITLE_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Restore from a trusted source (database)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoticeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Notice body, trimmed, no length cap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeContent(String);

impl NoticeContent {
    pub fn new(raw: &str) -> Result<Self, NoticeValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(NoticeValidationError::EmptyContent);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Restore from a trusted source (database)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoticeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trims() {
        let title = NoticeTitle::new("  Sports Day  ").unwrap();
        assert_eq!(title.as_str(), "Sports Day");
    }

    #[test]
    fn test_title_rejects_empty() {
        assert_eq!(
            NoticeTitle::new("   ").unwrap_err(),
            NoticeValidationError::EmptyTitle
        );
    }

    #[test]
    fn test_title_length_boundary() {
        assert!(NoticeTitle::new(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert_eq!(
            NoticeTitle::new(&"x".repeat(MAX_TITLE_LENGTH + 1)).unwrap_err(),
            NoticeValidationError::TitleTooLong {
                max: MAX_TITLE_LENGTH,
                actual: MAX_TITLE_LENGTH + 1
            }
        );
    }

    #[test]
    fn test_content_rejects_empty() {
        assert_eq!(
            NoticeContent::new("").unwrap_err(),
            NoticeValidationError::EmptyContent
        );
        assert!(NoticeContent::new("School closes early on Friday.").is_ok());
    }
}
