//! User Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum display name length in characters
const MAX_NAME_LENGTH: usize = 100;

/// Display name shown on notices and in the user list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::bad_request("Name is too long"));
        }

        if trimmed.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request("Name contains invalid characters"));
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

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = UserName::new("  Teacher Smith  ").unwrap();
        assert_eq!(name.as_str(), "Teacher Smith");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(UserName::new(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
        assert!(UserName::new(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(UserName::new("bad\u{0007}name").is_err());
    }
}
