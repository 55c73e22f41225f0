//! Email Value Object

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum total length per RFC 5321
const MAX_EMAIL_LENGTH: usize = 254;

/// Validated, lowercased email address
///
/// Validation is intentionally loose: one `@`, a non-empty local part,
/// and a domain containing at least one dot. The mail server is the
/// final authority on deliverability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        if trimmed.len() > MAX_EMAIL_LENGTH {
            return Err(AppError::bad_request("Email is too long"));
        }

        let (local, domain) = trimmed
            .split_once('@')
            .ok_or_else(|| AppError::bad_request("Email must contain '@'"))?;

        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(AppError::bad_request("Email format is invalid"));
        }

        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(AppError::bad_request("Email domain is invalid"));
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::bad_request("Email contains invalid characters"));
        }

        // Store lowercased so uniqueness checks are case-insensitive
        Ok(Self(trimmed.to_lowercase()))
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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("Admin@Example.com").unwrap();
        assert_eq!(email.as_str(), "admin@example.com");
    }

    #[test]
    fn test_trims_whitespace() {
        let email = Email::new("  user@example.com  ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("no-at-sign").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("user@nodot").is_err());
        assert!(Email::new("user@.com").is_err());
        assert!(Email::new("us er@example.com").is_err());
        assert!(Email::new("a@b@example.com").is_err());
    }

    #[test]
    fn test_rejects_too_long() {
        let raw = format!("{}@example.com", "x".repeat(250));
        assert!(Email::new(&raw).is_err());
    }
}
