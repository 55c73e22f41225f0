//! Delete User Use Case
//!
//! Admins cannot delete their own account, which also guarantees at
//! least one admin survives any delete. The fate of the deleted user's
//! notices follows the configured [`OrphanedNoticePolicy`].

use std::sync::Arc;

use kernel::actor::Actor;
use uuid::Uuid;

use crate::application::config::{AccountsConfig, OrphanedNoticePolicy};
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};

/// Delete user use case
pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountsConfig>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, actor: &Actor, user_id: Uuid) -> AccountsResult<()> {
        if actor.user_id.as_uuid() == &user_id {
            return Err(AccountsError::CannotDeleteSelf);
        }

        let account = self
            .user_repo
            .find_by_id(&user_id.into())
            .await?
            .ok_or(AccountsError::UserNotFound)?;

        if self.config.orphaned_notices == OrphanedNoticePolicy::Delete {
            let removed = self
                .user_repo
                .delete_notices_authored_by(&account.user_id)
                .await?;
            if removed > 0 {
                tracing::info!(
                    user_id = %account.user_id,
                    notices_removed = removed,
                    "Removed notices of deleted user"
                );
            }
        }

        let rows = self.user_repo.delete(&account.user_id).await?;
        if rows == 0 {
            return Err(AccountsError::UserNotFound);
        }

        tracing::info!(
            user_id = %account.user_id,
            deleted_by = %actor.user_id,
            "User account deleted"
        );

        Ok(())
    }
}
