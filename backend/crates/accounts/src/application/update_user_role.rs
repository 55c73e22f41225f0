//! Update User Role Use Case
//!
//! Two guards apply beyond the admin-only route check: promoting into
//! the admin role must not exceed the configured seat cap, and the
//! last remaining admin cannot be demoted.

use std::sync::Arc;

use kernel::role::Role;
use uuid::Uuid;

use crate::application::config::AccountsConfig;
use crate::domain::entity::user_account::UserAccount;
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};

/// Update user role use case
pub struct UpdateUserRoleUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountsConfig>,
}

impl<U> UpdateUserRoleUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, user_id: Uuid, new_role: Role) -> AccountsResult<UserAccount> {
        let mut account = self
            .user_repo
            .find_by_id(&user_id.into())
            .await?
            .ok_or(AccountsError::UserNotFound)?;

        if account.role == new_role {
            return Ok(account);
        }

        if new_role == Role::Admin {
            let admins = self.user_repo.count_admins().await?;
            if admins >= self.config.max_admins as i64 {
                return Err(AccountsError::AdminLimitReached {
                    max: self.config.max_admins,
                });
            }
        }

        if account.role == Role::Admin {
            let admins = self.user_repo.count_admins().await?;
            if admins <= 1 {
                return Err(AccountsError::LastAdmin);
            }
        }

        let old_role = account.role;
        account.set_role(new_role);
        self.user_repo.update(&account).await?;

        tracing::info!(
            user_id = %account.user_id,
            old_role = %old_role,
            new_role = %new_role,
            "User role changed"
        );

        Ok(account)
    }
}
