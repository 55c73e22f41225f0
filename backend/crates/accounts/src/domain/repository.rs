//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user_account::UserAccount;
use crate::domain::value_object::email::Email;
use crate::error::AccountsResult;

/// User account repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new account
    async fn create(&self, account: &UserAccount) -> AccountsResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<UserAccount>>;

    /// Find account by email (emails are stored lowercased)
    async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<UserAccount>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool>;

    /// List all accounts, newest first
    async fn list(&self) -> AccountsResult<Vec<UserAccount>>;

    /// Persist changes to an existing account
    async fn update(&self, account: &UserAccount) -> AccountsResult<()>;

    /// Delete an account, returning the number of rows removed
    async fn delete(&self, user_id: &UserId) -> AccountsResult<u64>;

    /// Count accounts holding the admin role
    async fn count_admins(&self) -> AccountsResult<i64>;

    /// Remove all notices authored by a user (orphan cleanup policy)
    async fn delete_notices_authored_by(&self, user_id: &UserId) -> AccountsResult<u64>;
}
