//! Create User Use Case

use std::sync::Arc;

use kernel::role::Role;
use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::domain::entity::user_account::UserAccount;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AccountsError, AccountsResult};

/// Create user input
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Create user use case
pub struct CreateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountsConfig>,
}

impl<U> CreateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: CreateUserInput) -> AccountsResult<UserAccount> {
        let name = UserName::new(&input.name)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;
        let email = Email::new(&input.email)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AccountsError::EmailTaken);
        }

        // The admin cap is enforced here, not in the client
        if input.role == Role::Admin {
            let admins = self.user_repo.count_admins().await?;
            if admins >= self.config.max_admins as i64 {
                return Err(AccountsError::AdminLimitReached {
                    max: self.config.max_admins,
                });
            }
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AccountsError::PasswordPolicy(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AccountsError::Internal(e.to_string()))?;

        let account = UserAccount::new(name, email, password_hash, input.role);
        self.user_repo.create(&account).await?;

        tracing::info!(
            user_id = %account.user_id,
            role = %account.role,
            "User account created"
        );

        Ok(account)
    }
}
