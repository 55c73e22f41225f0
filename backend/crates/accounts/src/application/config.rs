//! Accounts Configuration

use platform::crypto::random_secret;
use std::time::Duration;

/// What happens to a deleted user's notices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanedNoticePolicy {
    /// Keep the notices; the snapshotted author name stays readable
    #[default]
    Retain,
    /// Remove the notices together with the account
    Delete,
}

impl OrphanedNoticePolicy {
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "retain" => Some(Self::Retain),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Accounts configuration
#[derive(Clone)]
pub struct AccountsConfig {
    /// HMAC-SHA256 key used to sign access tokens
    pub token_secret: [u8; 32],
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Optional application-wide password pepper
    pub password_pepper: Option<Vec<u8>>,
    /// Server-enforced cap on accounts holding the admin role
    pub max_admins: usize,
    /// Cleanup policy applied when an account is deleted
    pub orphaned_notices: OrphanedNoticePolicy,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 60 * 60),
            password_pepper: None,
            max_admins: 2,
            orphaned_notices: OrphanedNoticePolicy::default(),
        }
    }
}

impl AccountsConfig {
    /// Config with a freshly generated signing key
    ///
    /// Tokens do not survive a restart with this; production should
    /// supply a stable secret instead.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: random_secret(),
            ..Self::default()
        }
    }

    /// Token lifetime in milliseconds, for expiry claims
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Get pepper as a byte slice if configured
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccountsConfig::default();
        assert_eq!(config.max_admins, 2);
        assert_eq!(config.token_ttl_ms(), 24 * 60 * 60 * 1000);
        assert_eq!(config.orphaned_notices, OrphanedNoticePolicy::Retain);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AccountsConfig::with_random_secret();
        let b = AccountsConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            OrphanedNoticePolicy::from_str_opt("RETAIN"),
            Some(OrphanedNoticePolicy::Retain)
        );
        assert_eq!(
            OrphanedNoticePolicy::from_str_opt("delete"),
            Some(OrphanedNoticePolicy::Delete)
        );
        assert_eq!(OrphanedNoticePolicy::from_str_opt("drop"), None);
    }
}
